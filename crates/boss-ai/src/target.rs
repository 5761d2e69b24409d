//! Boundary to whatever the boss is fighting.

/// Something the boss can chase and hit.
pub trait Target {
    /// Signed horizontal offset from `x` to this target (`target.x - x`).
    fn offset_from(&self, x: f32) -> f32;

    /// Applies `amount` damage to this target.
    fn take_damage(&mut self, amount: i32);
}

impl<T: Target + ?Sized> Target for Box<T> {
    fn offset_from(&self, x: f32) -> f32 {
        (**self).offset_from(x)
    }

    fn take_damage(&mut self, amount: i32) {
        (**self).take_damage(amount);
    }
}
