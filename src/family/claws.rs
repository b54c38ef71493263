use crate::family::Family;

/// Product `C_a x C_b` of two claws. A claw of size `k` is a root `0` with `k` leaves above it.
pub struct Claws {
    a: u32,
    b: u32,
}

impl Claws {
    pub fn new(a: u32, b: u32) -> Self {
        Claws { a, b }
    }
}

impl Family for Claws {
    type Element = (u32, u32);

    fn name(&self) -> String {
        format!("prod_of_claws_{}{}", self.a, self.b)
    }

    fn enumerate(&self) -> Vec<(u32, u32)> {
        (0..=self.a).flat_map(|u| (0..=self.b).map(move |v| (u, v))).collect()
    }

    fn rank(&self, &(u, v): &(u32, u32)) -> usize {
        usize::from(u > 0) + usize::from(v > 0)
    }

    fn label(&self, &(u, v): &(u32, u32)) -> String {
        format!("{u}{v}")
    }

    fn covers(&self, upper: &(u32, u32), lower: &(u32, u32)) -> bool {
        if self.rank(upper) != self.rank(lower) + 1 {
            return false;
        }
        let (&(u1, v1), &(u2, v2)) = (upper, lower);
        (v1 == v2 && u2 == 0 && u1 > 0) || (u1 == u2 && v2 == 0 && v1 > 0)
    }
}
