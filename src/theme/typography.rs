//! Typography - Font Sizes

/// Typography constants
pub struct Typography;

impl Typography {
    pub const TEXT_XS: f32 = 12.0;
    pub const TEXT_SM: f32 = 13.0;
    pub const TEXT_BASE: f32 = 14.0;
    pub const TEXT_LG: f32 = 16.0;
    pub const TEXT_XL: f32 = 18.0;
    pub const TEXT_2XL: f32 = 22.0;
}
