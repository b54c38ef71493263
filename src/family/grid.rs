use crate::error::{HasseError, Result};
use crate::family::{digits, Family};

/// Product of chains `[0, b_1] x ... x [0, b_k]` ordered componentwise.
pub struct Grid {
    bounds: Vec<u32>,
}

impl Grid {
    pub fn new(bounds: Vec<u32>) -> Result<Self> {
        if bounds.is_empty() {
            return Err(HasseError::InvalidArgument("grid needs at least one bound".into()));
        }
        Ok(Grid { bounds })
    }
}

impl Family for Grid {
    type Element = Vec<u32>;

    fn name(&self) -> String {
        format!("grid_{}", digits(&self.bounds))
    }

    fn enumerate(&self) -> Vec<Vec<u32>> {
        let mut out = Vec::new();
        let mut point = vec![0u32; self.bounds.len()];
        loop {
            out.push(point.clone());
            // odometer step, last coordinate fastest
            let mut i = point.len();
            loop {
                if i == 0 {
                    return out;
                }
                i -= 1;
                if point[i] < self.bounds[i] {
                    point[i] += 1;
                    break;
                }
                point[i] = 0;
            }
        }
    }

    fn rank(&self, point: &Vec<u32>) -> usize {
        point.iter().map(|&x| x as usize).sum()
    }

    fn label(&self, point: &Vec<u32>) -> String {
        digits(point)
    }

    fn covers(&self, upper: &Vec<u32>, lower: &Vec<u32>) -> bool {
        if self.rank(upper) != self.rank(lower) + 1 {
            return false;
        }
        upper.iter().zip(lower).filter(|(u, l)| u != l).count() == 1
    }
}
