/// Scoring parameters for local alignment. Values are applied as-is:
/// `mismatch` and `gap` are usually negative. No validation is performed.
#[derive(Clone, Copy, Debug)]
pub struct SwParams {
    pub match_score: i32,
    pub mismatch: i32,
    pub gap: i32,
}

impl Default for SwParams {
    fn default() -> Self {
        Self { match_score: 2, mismatch: -1, gap: -2 }
    }
}

/// Predecessor of a DP cell. `Stop` marks a local-alignment boundary
/// (score clamped to zero) or the matrix edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trace {
    Stop,
    Diag,
    Up,
    Left,
}

/// Result of one alignment call. The aligned strings have equal length and
/// carry the uppercased characters of the inputs, with `-` marking gaps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwResult {
    pub score: i32,
    pub aligned_a: String,
    pub aligned_b: String,
}

/// Smith-Waterman local alignment with a linear gap penalty.
///
/// Quadratic time and space: two flat row-major `(m+1) x (n+1)` grids, one
/// for scores and one for trace directions. Inputs are uppercased per
/// character before comparison; any character is accepted and compared by
/// exact equality.
///
/// Tie-break policy, load-bearing for reproducibility:
/// - when predecessors tie, `Diag` beats `Up` beats `Left`;
/// - when several cells tie for the best score, the first one in row-major
///   scan order wins.
///
/// Total over all inputs: empty sequences yield score 0 and empty outputs.
pub fn smith_waterman(a: &str, b: &str, p: SwParams) -> SwResult {
    let a: Vec<char> = a.chars().map(|c| c.to_ascii_uppercase()).collect();
    let b: Vec<char> = b.chars().map(|c| c.to_ascii_uppercase()).collect();
    let m = a.len();
    let n = b.len();

    let cols = n + 1;
    let size = (m + 1) * cols;
    let mut h = vec![0i32; size];
    let mut tb = vec![Trace::Stop; size];

    let mut best_score = 0i32;
    let mut best_i = 0usize;
    let mut best_j = 0usize;

    for i in 1..=m {
        for j in 1..=n {
            let idx = i * cols + j;
            let diag_idx = (i - 1) * cols + (j - 1);
            let up_idx = (i - 1) * cols + j;
            let left_idx = i * cols + (j - 1);

            let subst = if a[i - 1] == b[j - 1] { p.match_score } else { p.mismatch };
            let diag = h[diag_idx] + subst;
            let up = h[up_idx] + p.gap;
            let left = h[left_idx] + p.gap;

            let score = diag.max(up).max(left).max(0);
            h[idx] = score;

            tb[idx] = if score == 0 {
                Trace::Stop
            } else if score == diag {
                Trace::Diag
            } else if score == up {
                Trace::Up
            } else {
                Trace::Left
            };

            // strict '>' so the first row-major occurrence of the best
            // score keeps the traceback start
            if score > best_score {
                best_score = score;
                best_i = i;
                best_j = j;
            }
        }
    }

    // backtrack from the best cell to the nearest Stop or edge
    let mut aa: Vec<char> = Vec::new();
    let mut bb: Vec<char> = Vec::new();
    let mut i = best_i;
    let mut j = best_j;

    while i > 0 && j > 0 {
        match tb[i * cols + j] {
            Trace::Stop => break,
            Trace::Diag => {
                aa.push(a[i - 1]);
                bb.push(b[j - 1]);
                i -= 1;
                j -= 1;
            }
            Trace::Up => {
                aa.push(a[i - 1]);
                bb.push('-');
                i -= 1;
            }
            Trace::Left => {
                aa.push('-');
                bb.push(b[j - 1]);
                j -= 1;
            }
        }
    }

    aa.reverse();
    bb.reverse();

    SwResult {
        score: best_score,
        aligned_a: aa.into_iter().collect(),
        aligned_b: bb.into_iter().collect(),
    }
}
