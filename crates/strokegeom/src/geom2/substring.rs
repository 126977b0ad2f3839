//! Arc-length substrings of polylines and seam-free stitching.
//!
//! - `polyline_substring`: sub-path between two signed arc-length positions,
//!   with interpolated end points where a cut falls mid-segment.
//! - `append_polyline` / `stitch`: concatenate pieces without repeating the
//!   join vertex.
//!
//! Bounds are order-independent: the interval is always `[min, max]` of the
//! two resolved positions and is extracted low-to-high.

use nalgebra::Vector2;

use super::measure::{arc_lengths, lerp_by_distance, resolve_distance};
use super::types::{check_distance, check_vertices, LineCfg, LineError, Polyline};

/// Sub-polyline between `start` and `end` using `LineCfg::default()`.
///
/// Signed distances: `d >= 0` from the first vertex, `d < 0` back from the
/// last one. Empty, inverted-to-nothing or out-of-range intervals yield an
/// empty polyline; only non-finite input is an error.
#[inline]
pub fn polyline_substring(
    line: &[Vector2<f64>],
    start: f64,
    end: f64,
) -> Result<Polyline, LineError> {
    polyline_substring_cfg(line, start, end, LineCfg::default())
}

/// Sub-polyline between `start` and `end` with explicit tolerances.
pub fn polyline_substring_cfg(
    line: &[Vector2<f64>],
    start: f64,
    end: f64,
    cfg: LineCfg,
) -> Result<Polyline, LineError> {
    let start = check_distance(start)?;
    let end = check_distance(end)?;
    check_vertices(line)?;
    if line.len() < 2 {
        return Ok(Vec::new());
    }

    let arc = arc_lengths(line);
    let total = arc[arc.len() - 1];
    let (Some(a), Some(b)) = (resolve_distance(start, total), resolve_distance(end, total)) else {
        return Ok(Vec::new());
    };
    let lo = a.min(b);
    let hi = b.max(a).min(total);
    if lo >= total || hi <= 0.0 || hi - lo <= cfg.eps_len {
        return Ok(Vec::new());
    }

    // Segment containing `lo`: first one whose far end lies beyond it.
    // Exists because lo < total.
    let Some(first) = arc[1..].iter().position(|&s| s > lo) else {
        return Ok(Vec::new());
    };

    let mut out: Polyline = Vec::with_capacity(line.len() - first + 1);
    // Cuts within eps of either end of the segment snap to that vertex.
    let head = if lo - arc[first] <= cfg.eps_len {
        line[first]
    } else if arc[first + 1] - lo <= cfg.eps_len {
        line[first + 1]
    } else {
        lerp_by_distance(
            line[first],
            line[first + 1],
            lo - arc[first],
            arc[first + 1] - arc[first],
        )
    };
    out.push(head);

    for j in (first + 1)..line.len() {
        if arc[j] < hi - cfg.eps_len {
            push_distinct(&mut out, line[j], cfg);
            continue;
        }
        let tail = if arc[j] - hi <= cfg.eps_len {
            line[j]
        } else {
            lerp_by_distance(line[j - 1], line[j], hi - arc[j - 1], arc[j] - arc[j - 1])
        };
        push_distinct(&mut out, tail, cfg);
        break;
    }

    if out.len() < 2 {
        return Ok(Vec::new());
    }
    Ok(out)
}

#[inline]
fn push_distinct(out: &mut Polyline, p: Vector2<f64>, cfg: LineCfg) {
    match out.last() {
        Some(&last) if cfg.coincident(last, p) => {}
        _ => out.push(p),
    }
}

/// Append `to_append` onto `target`, dropping the leading points of
/// `to_append` that exactly equal the current last point of `target`.
pub fn append_polyline(target: &mut Polyline, to_append: &[Vector2<f64>]) {
    let skip = match target.last() {
        Some(last) => to_append.iter().take_while(|p| *p == last).count(),
        None => 0,
    };
    target.extend_from_slice(&to_append[skip..]);
}

/// Fold `append_polyline` over `pieces`, in order.
pub fn stitch<'a, I>(pieces: I) -> Polyline
where
    I: IntoIterator<Item = &'a [Vector2<f64>]>,
{
    pieces.into_iter().fold(Vec::new(), |mut acc, piece| {
        append_polyline(&mut acc, piece);
        acc
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    fn ell() -> Vec<Vector2<f64>> {
        vec![vector![11.0, 2.0], vector![11.0, 12.0], vector![111.0, 12.0]]
    }

    fn assert_pts(got: &[Vector2<f64>], want: &[Vector2<f64>]) {
        assert_eq!(got.len(), want.len(), "got {:?}, want {:?}", got, want);
        for (g, w) in got.iter().zip(want) {
            assert!((g - w).norm() < 1e-12, "got {:?}, want {:?}", got, want);
        }
    }

    #[test]
    fn empty_and_single_point_lines_never_crash() {
        for (s, e) in [(1.0, 2.0), (-1.0, 2.0), (1.0, -2.0), (-1.0, -2.0)] {
            assert!(polyline_substring(&[], s, e).unwrap().is_empty());
            assert!(polyline_substring(&[vector![3.0, 4.0]], s, e)
                .unwrap()
                .is_empty());
        }
    }

    #[test]
    fn l_shape_reference_cases() {
        let line = ell();
        let sub = |s, e| polyline_substring(&line, s, e).unwrap();
        assert!(sub(0.0, -110.0).is_empty());
        assert_pts(&sub(0.0, 110.0), &line);
        assert!(sub(-1.0, -1000.0).is_empty());
        assert!(sub(1.0, -1000.0).is_empty());
        assert_pts(&sub(-1.0, 1000.0), &[vector![110.0, 12.0], vector![111.0, 12.0]]);
        assert!(sub(100000.0, -10000.0).is_empty());
        assert!(sub(1.0, -109.0).is_empty());
        assert_pts(
            &sub(1.0, 109.0),
            &[vector![11.0, 3.0], vector![11.0, 12.0], vector![110.0, 12.0]],
        );
        assert_pts(
            &sub(-109.0, 109.0),
            &[vector![11.0, 3.0], vector![11.0, 12.0], vector![110.0, 12.0]],
        );
        assert_pts(&sub(1.0, 10.0), &[vector![11.0, 3.0], vector![11.0, 12.0]]);
        assert_pts(
            &sub(1.0, -90.0),
            &[vector![11.0, 3.0], vector![11.0, 12.0], vector![21.0, 12.0]],
        );
    }

    #[test]
    fn bounds_are_order_independent() {
        let line = ell();
        for (s, e) in [(1.0, 109.0), (-1.0, 1000.0), (1.0, -90.0), (5.0, 10.0), (0.0, 110.0)] {
            let fwd = polyline_substring(&line, s, e).unwrap();
            let rev = polyline_substring(&line, e, s).unwrap();
            assert_eq!(fwd, rev);
        }
    }

    #[test]
    fn zero_end_is_position_zero() {
        let line = ell();
        let sub = polyline_substring(&line, 1.0, 0.0).unwrap();
        assert_pts(&sub, &[vector![11.0, 2.0], vector![11.0, 3.0]]);
    }

    #[test]
    fn cuts_exactly_on_vertices_do_not_duplicate() {
        let line = ell();
        let sub = polyline_substring(&line, 10.0, 110.0).unwrap();
        assert_pts(&sub, &[vector![11.0, 12.0], vector![111.0, 12.0]]);
        let sub = polyline_substring(&line, 0.0, 10.0).unwrap();
        assert_pts(&sub, &[vector![11.0, 2.0], vector![11.0, 12.0]]);
        let sub = polyline_substring(&line, -100.0, 60.0).unwrap();
        assert_pts(&sub, &[vector![11.0, 12.0], vector![61.0, 12.0]]);
    }

    #[test]
    fn cut_just_before_corner_keeps_corner() {
        let line = ell();
        let sub = polyline_substring(&line, 9.9999999999, 60.0).unwrap();
        assert_eq!(sub.len(), 2);
        assert_eq!(sub[0], vector![11.0, 12.0]);
        assert!((sub[1] - vector![61.0, 12.0]).norm() < 1e-12);
        // from-end arithmetic landing next to the corner
        let sub = polyline_substring(&line, -(100.0 + 1e-10), 110.0).unwrap();
        assert_eq!(sub, vec![vector![11.0, 12.0], vector![111.0, 12.0]]);
    }

    #[test]
    fn repeated_input_vertices_are_collapsed() {
        let line = vec![
            vector![0.0, 0.0],
            vector![5.0, 0.0],
            vector![5.0, 0.0],
            vector![10.0, 0.0],
        ];
        let sub = polyline_substring(&line, 1.0, 9.0).unwrap();
        assert_pts(&sub, &[vector![1.0, 0.0], vector![5.0, 0.0], vector![9.0, 0.0]]);
        let sub = polyline_substring(&line, 5.0, 10.0).unwrap();
        assert_pts(&sub, &[vector![5.0, 0.0], vector![10.0, 0.0]]);
    }

    #[test]
    fn equal_bounds_give_empty() {
        let line = ell();
        assert!(polyline_substring(&line, 50.0, 50.0).unwrap().is_empty());
        assert!(polyline_substring(&line, 60.0, -50.0).unwrap().is_empty());
    }

    #[test]
    fn zero_length_line_is_empty() {
        let line = vec![vector![1.0, 1.0], vector![1.0, 1.0], vector![1.0, 1.0]];
        assert!(polyline_substring(&line, 0.0, 5.0).unwrap().is_empty());
    }

    #[test]
    fn overshooting_end_keeps_final_vertex() {
        let line = ell();
        let sub = polyline_substring(&line, 100.0, 1e9).unwrap();
        assert_pts(&sub, &[vector![101.0, 12.0], vector![111.0, 12.0]]);
    }

    #[test]
    fn non_finite_input_is_invalid_argument() {
        let line = ell();
        assert!(matches!(
            polyline_substring(&line, f64::NAN, 1.0),
            Err(LineError::NonFiniteDistance { .. })
        ));
        assert!(matches!(
            polyline_substring(&line, 0.0, f64::INFINITY),
            Err(LineError::NonFiniteDistance { .. })
        ));
        let bad = vec![vector![0.0, 0.0], vector![f64::NAN, 1.0]];
        assert_eq!(
            polyline_substring(&bad, 0.0, 1.0),
            Err(LineError::NonFiniteVertex { index: 1 })
        );
    }

    #[test]
    fn input_is_not_mutated_and_output_is_repeatable() {
        let line = ell();
        let copy = line.clone();
        let a = polyline_substring(&line, 3.5, -7.25).unwrap();
        let b = polyline_substring(&line, 3.5, -7.25).unwrap();
        assert_eq!(a, b);
        assert_eq!(line, copy);
    }

    #[test]
    fn append_drops_duplicate_join() {
        let mut line = ell();
        append_polyline(
            &mut line,
            &[
                vector![111.0, 12.0],
                vector![111.0, 12.0],
                vector![111.0, 14.0],
                vector![111.0, 15.0],
            ],
        );
        assert_eq!(
            line,
            vec![
                vector![11.0, 2.0],
                vector![11.0, 12.0],
                vector![111.0, 12.0],
                vector![111.0, 14.0],
                vector![111.0, 15.0],
            ]
        );

        let mut line = ell();
        append_polyline(
            &mut line,
            &[vector![111.0, 12.0], vector![111.0, 14.0], vector![111.0, 15.0]],
        );
        assert_eq!(line.len(), 5);
    }

    #[test]
    fn append_without_shared_point_concatenates() {
        let mut line = ell();
        append_polyline(&mut line, &[vector![111.0, 14.0], vector![111.0, 15.0]]);
        assert_eq!(line.len(), 5);
        assert_eq!(line[3], vector![111.0, 14.0]);

        let mut empty: Polyline = Vec::new();
        append_polyline(&mut empty, &ell());
        assert_eq!(empty, ell());

        let mut line = ell();
        append_polyline(&mut line, &[]);
        assert_eq!(line, ell());
    }

    #[test]
    fn stitch_rebuilds_split_line() {
        let line = ell();
        let a = polyline_substring(&line, 0.0, 30.0).unwrap();
        let b = polyline_substring(&line, 30.0, 110.0).unwrap();
        let joined = stitch([a.as_slice(), b.as_slice()]);
        assert_pts(
            &joined,
            &[
                vector![11.0, 2.0],
                vector![11.0, 12.0],
                vector![31.0, 12.0],
                vector![111.0, 12.0],
            ],
        );
    }
}
