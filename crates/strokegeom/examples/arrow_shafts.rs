//! Cut a line into a shaft and a head, then dash the shaft.
//!
//! Usage:
//!   cargo run -p strokegeom --example arrow_shafts -- [head_length]
//!
//! Prints the shaft, head, and dash pieces as coordinate lists.

use strokegeom::prelude::*;

fn main() {
    let head_len = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<f64>().ok())
        .unwrap_or(10.0);
    let line = vec![
        Vec2::new(11.0, 2.0),
        Vec2::new(11.0, 12.0),
        Vec2::new(111.0, 12.0),
    ];
    let total = total_length(&line);
    let (shaft, head) = match (
        polyline_substring(&line, 0.0, -head_len),
        polyline_substring(&line, -head_len, total),
    ) {
        (Ok(s), Ok(h)) => (s, h),
        (Err(e), _) | (_, Err(e)) => {
            eprintln!("bad head length: {e}");
            return;
        }
    };
    println!("total  = {total}");
    println!("shaft  = {:?}", coords(&shaft));
    println!("head   = {:?}", coords(&head));
    let Ok(pattern) = DashPattern::new(vec![6.0, 3.0], 0.0) else {
        return;
    };
    if let Ok(pieces) = dash_polyline(&shaft, &pattern, LineCfg::default()) {
        for (k, piece) in pieces.iter().enumerate() {
            println!("dash {k:>2} = {:?}", coords(piece));
        }
    }
}

fn coords(line: &[Vec2<f64>]) -> Vec<(f64, f64)> {
    line.iter().map(|p| (p.x, p.y)).collect()
}
