//! Class color and marker table for event displays.

use coal_model::{HadronClass, PartonClass};
use plotters::style::RGBColor;

pub const QUARK_COLOR: RGBColor = RGBColor(0xe6, 0x7c, 0x73);
pub const ANTIQUARK_COLOR: RGBColor = RGBColor(0x7b, 0xaa, 0xf7);
pub const MESON_COLOR: RGBColor = RGBColor(0xf7, 0xcb, 0x4d);
pub const BARYON_COLOR: RGBColor = RGBColor(0x41, 0xb3, 0x75);
pub const ANTIBARYON_COLOR: RGBColor = RGBColor(0xba, 0x67, 0xc8);

/// Marker shape for scatter points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Dot,
    Circle,
    TriangleUp,
    TriangleDown,
}

#[derive(Debug, Clone, Copy)]
pub struct ClassStyle {
    pub label: &'static str,
    pub color: RGBColor,
    pub marker: Marker,
    pub size: i32,
}

pub fn parton_style(class: PartonClass) -> ClassStyle {
    match class {
        PartonClass::Quark => ClassStyle {
            label: "Quark",
            color: QUARK_COLOR,
            marker: Marker::Dot,
            size: 2,
        },
        PartonClass::AntiQuark => ClassStyle {
            label: "Anti-quark",
            color: ANTIQUARK_COLOR,
            marker: Marker::Dot,
            size: 2,
        },
    }
}

pub fn hadron_style(class: HadronClass) -> ClassStyle {
    match class {
        HadronClass::Meson => ClassStyle {
            label: "Meson",
            color: MESON_COLOR,
            marker: Marker::Circle,
            size: 3,
        },
        HadronClass::Baryon => ClassStyle {
            label: "Baryon",
            color: BARYON_COLOR,
            marker: Marker::TriangleUp,
            size: 4,
        },
        HadronClass::AntiBaryon => ClassStyle {
            label: "Anti-baryon",
            color: ANTIBARYON_COLOR,
            marker: Marker::TriangleDown,
            size: 4,
        },
    }
}
