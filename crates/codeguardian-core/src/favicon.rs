//! Favicon encoder.
//!
//! Produces a 16x16 32-bit `.ico` holding a single BMP-encoded image, so the
//! site ships an icon without a binary asset in the tree. Layout:
//!
//! ```text
//! ICONDIR (6) | ICONDIRENTRY (16) | BITMAPINFOHEADER (40) | BGRA pixels (1024) | AND mask (64)
//! ```
//!
//! All integers are little-endian. Pixel rows and mask rows are stored
//! bottom-up, and the header height is doubled to cover both.

/// Icon edge length in pixels.
pub const ICON_SIZE: u32 = 16;

/// `ICON_SIZE` as written into the ICONDIRENTRY width and height bytes.
const ENTRY_SIZE: u8 = 16;
/// `ICON_SIZE` as written into the BITMAPINFOHEADER width.
const BITMAP_WIDTH: i32 = 16;
/// Colour rows plus mask rows.
const BITMAP_HEIGHT: i32 = BITMAP_WIDTH * 2;

const ICONDIR_LEN: u32 = 6;
const ICONDIRENTRY_LEN: u32 = 16;
const BITMAPINFOHEADER_LEN: u32 = 40;
const BITS_PER_PIXEL: u16 = 32;
const PIXEL_DATA_LEN: u32 = ICON_SIZE * ICON_SIZE * 4;
/// One bit per pixel, each row padded to a 32-bit boundary.
const MASK_ROW_LEN: u32 = ICON_SIZE.div_ceil(32) * 4;
const MASK_DATA_LEN: u32 = MASK_ROW_LEN * ICON_SIZE;
const IMAGE_LEN: u32 = BITMAPINFOHEADER_LEN + PIXEL_DATA_LEN + MASK_DATA_LEN;
const IMAGE_OFFSET: u32 = ICONDIR_LEN + ICONDIRENTRY_LEN;

/// Total size of the encoded icon in bytes.
pub const FAVICON_LEN: usize = (IMAGE_OFFSET + IMAGE_LEN) as usize;

/// Shield with a check mark, top row first. `#` shield, `+` check, `.` clear.
const GLYPH: [&[u8; 16]; 16] = [
    b"................",
    b"..############..",
    b".##############.",
    b".##############.",
    b".###########+##.",
    b".##########++##.",
    b".#########++###.",
    b".##+#####++####.",
    b".##++###++#####.",
    b"..##++#++#####..",
    b"..###+++######..",
    b"...###+######...",
    b"....########....",
    b".....######.....",
    b"......####......",
    b"................",
];

/// BGRA colours.
const SHIELD: [u8; 4] = [0x97, 0xDC, 0x3D, 0xFF];
const CHECK: [u8; 4] = [0x20, 0x12, 0x0B, 0xFF];
const CLEAR: [u8; 4] = [0x00, 0x00, 0x00, 0x00];

/// Encode the site favicon.
pub fn favicon_ico() -> Vec<u8> {
    let mut out = Vec::with_capacity(FAVICON_LEN);

    // ICONDIR: reserved, type (1 = icon), image count.
    out.extend_from_slice(&0u16.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes());

    // ICONDIRENTRY. A width/height byte of 0 would mean 256.
    out.push(ENTRY_SIZE);
    out.push(ENTRY_SIZE);
    out.push(0); // palette size
    out.push(0); // reserved
    out.extend_from_slice(&1u16.to_le_bytes()); // colour planes
    out.extend_from_slice(&BITS_PER_PIXEL.to_le_bytes());
    out.extend_from_slice(&IMAGE_LEN.to_le_bytes());
    out.extend_from_slice(&IMAGE_OFFSET.to_le_bytes());

    // BITMAPINFOHEADER.
    out.extend_from_slice(&BITMAPINFOHEADER_LEN.to_le_bytes());
    out.extend_from_slice(&BITMAP_WIDTH.to_le_bytes());
    out.extend_from_slice(&BITMAP_HEIGHT.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes());
    out.extend_from_slice(&BITS_PER_PIXEL.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes()); // BI_RGB
    out.extend_from_slice(&(PIXEL_DATA_LEN + MASK_DATA_LEN).to_le_bytes());
    out.extend_from_slice(&0i32.to_le_bytes()); // x pixels per metre
    out.extend_from_slice(&0i32.to_le_bytes()); // y pixels per metre
    out.extend_from_slice(&0u32.to_le_bytes()); // colours used
    out.extend_from_slice(&0u32.to_le_bytes()); // important colours

    for row in GLYPH.iter().rev() {
        for &cell in row.iter() {
            let colour = match cell {
                b'#' => SHIELD,
                b'+' => CHECK,
                _ => CLEAR,
            };
            out.extend_from_slice(&colour);
        }
    }

    // Alpha carries transparency; an all-zero AND mask keeps every pixel.
    out.resize(FAVICON_LEN, 0);
    out
}
