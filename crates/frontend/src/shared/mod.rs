pub mod api_utils;
pub mod components;
pub mod icons;
pub mod notice;
pub mod number_format;
