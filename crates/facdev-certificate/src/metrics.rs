//! Helvetica width tables for text measurement.
//!
//! Widths are in thousandths of an em per the standard Type 1
//! metrics and cover printable ASCII. Characters outside that range
//! measure at a fixed fallback width and render as `?`.

/// The two faces the certificate page uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    Regular,
    Bold,
}

const FIRST_CHAR: u32 = 0x20;
const LAST_CHAR: u32 = 0x7e;
const FALLBACK_WIDTH: u16 = 556;

/// Helvetica advance widths for ASCII 0x20..=0x7e.
const REGULAR: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, // space ! " # $ % & '
    333, 333, 389, 584, 278, 333, 278, 278, // ( ) * + , - . /
    556, 556, 556, 556, 556, 556, 556, 556, // 0 1 2 3 4 5 6 7
    556, 556, 278, 278, 584, 584, 584, 556, // 8 9 : ; < = > ?
    1015, 667, 667, 722, 722, 667, 611, 778, // @ A B C D E F G
    722, 278, 500, 667, 556, 833, 722, 778, // H I J K L M N O
    667, 778, 722, 667, 611, 722, 667, 944, // P Q R S T U V W
    667, 667, 611, 278, 278, 278, 469, 556, // X Y Z [ \ ] ^ _
    333, 556, 556, 500, 556, 556, 278, 556, // ` a b c d e f g
    556, 222, 222, 500, 222, 833, 556, 556, // h i j k l m n o
    556, 556, 333, 500, 278, 556, 500, 722, // p q r s t u v w
    500, 500, 500, 334, 260, 334, 584, // x y z { | } ~
];

/// Helvetica-Bold advance widths for ASCII 0x20..=0x7e.
const BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, // space ! " # $ % & '
    333, 333, 389, 584, 278, 333, 278, 278, // ( ) * + , - . /
    556, 556, 556, 556, 556, 556, 556, 556, // 0 1 2 3 4 5 6 7
    556, 556, 333, 333, 584, 584, 584, 611, // 8 9 : ; < = > ?
    975, 722, 722, 722, 722, 667, 611, 778, // @ A B C D E F G
    722, 278, 556, 722, 611, 833, 722, 778, // H I J K L M N O
    667, 778, 722, 667, 611, 722, 667, 944, // P Q R S T U V W
    667, 667, 611, 333, 278, 333, 584, 556, // X Y Z [ \ ] ^ _
    333, 556, 611, 556, 611, 556, 333, 611, // ` a b c d e f g
    611, 278, 278, 556, 278, 889, 611, 611, // h i j k l m n o
    611, 611, 389, 556, 333, 611, 556, 778, // p q r s t u v w
    556, 556, 500, 389, 280, 389, 584, // x y z { | } ~
];

impl Face {
    fn widths(self) -> &'static [u16; 95] {
        match self {
            Face::Regular => &REGULAR,
            Face::Bold => &BOLD,
        }
    }
}

/// Advance width of one character in thousandths of an em.
pub fn glyph_width(face: Face, ch: char) -> u16 {
    let code = ch as u32;
    if (FIRST_CHAR..=LAST_CHAR).contains(&code) {
        face.widths()[(code - FIRST_CHAR) as usize]
    } else {
        FALLBACK_WIDTH
    }
}

/// Width of `text` in points at the given font size.
pub fn text_width_pt(face: Face, text: &str, size_pt: f32) -> f32 {
    let units: u32 = text.chars().map(|ch| u32::from(glyph_width(face, ch))).sum();
    units as f32 * size_pt / 1000.0
}

/// Encodes text for a literal PDF string. Printable ASCII passes
/// through unchanged, everything else becomes `?`.
pub fn encode(text: &str) -> Vec<u8> {
    text.chars()
        .map(|ch| {
            let code = ch as u32;
            if (FIRST_CHAR..=LAST_CHAR).contains(&code) {
                code as u8
            } else {
                b'?'
            }
        })
        .collect()
}
