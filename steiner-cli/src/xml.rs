//! XML rendering of a finished [`steiner_core::Net`], grounded on
//! `Net::dumpXML`/`dumpPoint`/`dumpSegment`
//! (`examples/original_source/Net.cpp`).
//!
//! The element and attribute layout follows the original byte-for-byte:
//! pins are listed once on the `pins` layer and again as vias on `pins_m2`,
//! via transitions on `m2_m3`, then vertical segments on `m3` and
//! horizontal segments on `m2`.

use std::fmt::Write as _;

use steiner_core::{Net, Point};

/// Renders `net` as the XML document the original `dumpXML` produces.
#[must_use]
pub fn render(net: &Net) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "<root>");
    let _ = writeln!(
        out,
        "  <grid min_x=\"{}\" max_x=\"{}\" min_y=\"{}\" max_y=\"{}\" />",
        net.bounds.lb.x, net.bounds.ru.x, net.bounds.lb.y, net.bounds.ru.y
    );
    let _ = writeln!(out, "  <net>");

    for pin in &net.pins {
        dump_point(&mut out, *pin, "pin", "pins");
    }
    for pin in &net.pins {
        dump_point(&mut out, *pin, "via", "pins_m2");
    }
    for via in &net.vias {
        dump_point(&mut out, *via, "via", "m2_m3");
    }
    for (a, b) in &net.vert_segs {
        dump_segment(&mut out, *a, *b, "m3");
    }
    for (a, b) in &net.hor_segs {
        dump_segment(&mut out, *a, *b, "m2");
    }

    let _ = writeln!(out, "  </net>");
    let _ = writeln!(out, "</root>");
    out
}

fn dump_point(out: &mut String, p: Point, ty: &str, layer: &str) {
    let _ = writeln!(
        out,
        "    <point x=\"{}\" y=\"{}\" layer=\"{layer}\" type=\"{ty}\" />",
        p.x, p.y
    );
}

fn dump_segment(out: &mut String, a: Point, b: Point, layer: &str) {
    let _ = writeln!(
        out,
        "    <segment x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" layer=\"{layer}\" />",
        a.x, a.y, b.x, b.y
    );
}
