use crate::color::{rgb8, Color};
use lazy_static::lazy_static;

lazy_static! {
    pub static ref TRACK_BG: Color = rgb8(0xEE, 0xEE, 0xEE);
    pub static ref TRACK_VALUE: Color = rgb8(0x50, 0x47, 0x9E);

    pub static ref HANDLE: Color = rgb8(0xCC, 0xCC, 0xCC);
    pub static ref HANDLE_DARK: Color = rgb8(0x00, 0x00, 0x00);
}
