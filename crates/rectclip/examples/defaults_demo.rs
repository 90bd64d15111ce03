//! Clip the default inputs of the interactive demo and print the results.
//!
//! Window (-10,-10)-(10,10), segment (-5,-5)-(5,5), and the diagonal triangle
//! (0,0),(1,1),(2,2) that the vertex inputs start out with.

use rectclip::prelude::*;

fn main() -> Result<(), ClipError> {
    let w = Window::new(-10.0, -10.0, 10.0, 10.0)?;

    match clip_segment(&w, Point::new(-5.0, -5.0), Point::new(5.0, 5.0)) {
        Some(seg) => println!("segment: ({}, {}) -> ({}, {})", seg.p1.x, seg.p1.y, seg.p2.x, seg.p2.y),
        None => println!("segment: outside"),
    }

    let verts: Vec<Point> = (0..3).map(|i| Point::new(i as f64, i as f64)).collect();
    let out = clip_points(&w, &verts)?;
    for (k, frag) in out.fragments().enumerate() {
        println!(
            "edge {k}: ({}, {}) -> ({}, {})",
            frag.p1.x, frag.p1.y, frag.p2.x, frag.p2.y
        );
    }

    let far = Polygon::new(vec![
        Point::new(20.0, 0.0),
        Point::new(30.0, 0.0),
        Point::new(25.0, 5.0),
    ])?;
    println!("far triangle keeps {} points", far.clip(&w).len());
    Ok(())
}
