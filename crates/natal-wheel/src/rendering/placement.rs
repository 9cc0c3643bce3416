//! Glyph spreading: keeps body glyphs from stacking on top of each other.

use crate::chart::normalize_longitude;

/// Run of neighbouring glyphs laid out at exactly the minimum gap around
/// the mean of their (unwrapped) true longitudes
struct Cluster {
    /// Input indices in display order
    members: Vec<usize>,
    sum: f64,
}

impl Cluster {
    fn len(&self) -> usize {
        self.members.len()
    }

    fn mean(&self) -> f64 {
        self.sum / self.len() as f64
    }

    fn first_position(&self, sep: f64) -> f64 {
        self.mean() - (self.len() - 1) as f64 * sep / 2.0
    }

    fn last_position(&self, sep: f64) -> f64 {
        self.mean() + (self.len() - 1) as f64 * sep / 2.0
    }

    fn absorb(&mut self, other: Cluster, offset: f64) {
        self.sum += other.sum + offset * other.len() as f64;
        self.members.extend(other.members);
    }
}

fn too_close(left_end: f64, right_start: f64, sep: f64) -> bool {
    right_start - left_end + 1e-9 < sep
}

/// Merge the last cluster into its predecessor until they no longer overlap
fn merge_tail(clusters: &mut Vec<Cluster>, sep: f64) {
    while clusters.len() > 1 {
        let last = &clusters[clusters.len() - 1];
        let before = &clusters[clusters.len() - 2];
        if !too_close(before.last_position(sep), last.first_position(sep), sep) {
            break;
        }
        if let Some(merged) = clusters.pop() {
            if let Some(target) = clusters.last_mut() {
                target.absorb(merged, 0.0);
            }
        }
    }
}

/// Display longitudes with cyclic neighbours at least `min_separation`
/// degrees apart. Output is in input order and keeps the zodiacal order of
/// the glyphs.
///
/// The circle is cut at its widest empty gap and overlapping neighbours are
/// merged into evenly spaced clusters; the last cluster is then checked
/// against the first one across the cut and merged with it while they
/// overlap. A separation of zero (or fewer than two inputs) returns the
/// normalized inputs. If the circle cannot hold every glyph at the requested
/// gap, the gap shrinks to 360 / n.
pub fn spread_longitudes(longitudes: &[f64], min_separation: f64) -> Vec<f64> {
    let mut out: Vec<f64> = longitudes.iter().map(|l| normalize_longitude(*l)).collect();
    let n = out.len();
    if n < 2 || min_separation <= 0.0 {
        return out;
    }
    let sep = min_separation.min(360.0 / n as f64);

    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|a, b| out[*a].total_cmp(&out[*b]).then(a.cmp(b)));

    // Start right after the widest gap so few clusters straddle it
    let mut cut = 0;
    let mut widest = f64::MIN;
    for k in 0..n {
        let a = out[order[k]];
        let b = out[order[(k + 1) % n]];
        let gap = if k + 1 < n { b - a } else { b + 360.0 - a };
        if gap > widest {
            widest = gap;
            cut = k;
        }
    }

    let mut clusters: Vec<Cluster> = Vec::with_capacity(n);
    let mut prev: Option<f64> = None;
    for m in 0..n {
        let i = order[(cut + 1 + m) % n];
        let mut v = out[i];
        if prev.is_some_and(|p| v < p) {
            v += 360.0;
        }
        prev = Some(v);
        clusters.push(Cluster {
            members: vec![i],
            sum: v,
        });
        merge_tail(&mut clusters, sep);
    }

    // Wrap-around: the first cluster sits 360° after the last one
    while clusters.len() > 1 {
        let first_start = clusters[0].first_position(sep) + 360.0;
        let last_end = clusters[clusters.len() - 1].last_position(sep);
        if !too_close(last_end, first_start, sep) {
            break;
        }
        let head = clusters.remove(0);
        if let Some(tail) = clusters.last_mut() {
            tail.absorb(head, 360.0);
        }
        merge_tail(&mut clusters, sep);
    }

    for cluster in &clusters {
        let start = cluster.first_position(sep);
        for (m, &i) in cluster.members.iter().enumerate() {
            out[i] = normalize_longitude(start + m as f64 * sep);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    fn gap(a: f64, b: f64) -> f64 {
        let d = (a - b).rem_euclid(360.0);
        d.min(360.0 - d)
    }

    #[test]
    fn test_disabled_is_identity() {
        assert_eq!(spread_longitudes(&[10.0, 11.0, 370.0], 0.0), vec![10.0, 11.0, 10.0]);
    }

    #[test]
    fn test_close_pair_is_pushed_apart_symmetrically() {
        let out = spread_longitudes(&[10.0, 12.0], 6.0);
        assert!((out[0] - 8.0).abs() < 1e-9);
        assert!((out[1] - 14.0).abs() < 1e-9);
    }

    #[test]
    fn test_pair_across_zero() {
        let out = spread_longitudes(&[359.0, 1.0], 6.0);
        assert!((out[0] - 357.0).abs() < 1e-9);
        assert!((out[1] - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_cluster_keeps_order_and_separation() {
        let out = spread_longitudes(&[100.0, 101.0, 102.0, 103.0, 200.0], 5.0);
        assert!(out[0] < out[1] && out[1] < out[2] && out[2] < out[3]);
        for i in 0..out.len() {
            for j in (i + 1)..out.len() {
                assert!(gap(out[i], out[j]) >= 5.0 - 1e-6, "{:?}", out);
            }
        }
        // isolated body untouched
        assert!((out[4] - 200.0).abs() < 1e-9);
    }

    #[test]
    fn test_well_separated_input_unchanged() {
        let input = [0.0, 90.0, 180.0, 270.0];
        assert_eq!(spread_longitudes(&input, 10.0), input.to_vec());
    }

    fn assert_cyclic_gaps(out: &[f64], sep: f64) {
        for i in 0..out.len() {
            for j in (i + 1)..out.len() {
                assert!(gap(out[i], out[j]) >= sep - 1e-6, "sep {} violated: {:?}", sep, out);
            }
        }
    }

    #[test]
    fn test_clusters_merge_across_the_cut() {
        let out = spread_longitudes(&[224.0, 118.0, 54.0, 321.0, 200.0], 70.0);
        assert_cyclic_gaps(&out, 70.0);
    }

    #[test]
    fn test_dense_charts_keep_every_cyclic_gap() {
        let cases: Vec<(Vec<f64>, f64)> = vec![
            (vec![224.0, 118.0, 54.0, 321.0, 200.0], 72.0),
            (vec![10.0, 12.0, 14.0, 350.0, 352.0, 180.0], 20.0),
            (
                vec![126.72, 207.02, 5.0, 40.0, 80.0, 150.0, 170.0, 250.0, 280.0, 300.0, 330.0],
                32.39,
            ),
            (vec![0.0, 0.5, 1.0, 359.0, 359.5, 120.0, 240.0], 40.0),
            (vec![90.0, 91.0, 92.0, 270.0, 271.0, 272.0], 55.0),
        ];
        for (input, sep) in &cases {
            let out = spread_longitudes(input, *sep);
            assert_cyclic_gaps(&out, sep.min(360.0 / input.len() as f64));
        }
    }

    #[test]
    fn test_seeded_random_charts_keep_every_cyclic_gap() {
        let mut rng = ChaCha8Rng::from_seed([7u8; 32]);
        for _ in 0..2000 {
            let n: usize = rng.gen_range(2..=12);
            let input: Vec<f64> = (0..n).map(|_| rng.gen_range(0.0..360.0)).collect();
            let sep = rng.gen_range(0.1..=360.0 / n as f64);
            let out = spread_longitudes(&input, sep);
            assert_cyclic_gaps(&out, sep);
        }
    }

    #[test]
    fn test_overfull_circle_shrinks_gap() {
        let out = spread_longitudes(&[0.0; 12], 40.0);
        let mut sorted = out.clone();
        sorted.sort_by(f64::total_cmp);
        for w in sorted.windows(2) {
            assert!((w[1] - w[0] - 30.0).abs() < 1e-6);
        }
    }
}
