use ecosim_data::Resource;

/// Quantity rules shared by every resource kind.
pub trait ResourceLogic {
    /// Removes up to `amount`, flooring at zero. Returns what was taken.
    fn consume(&mut self, amount: u32) -> u32;
    /// Adds `floor(quantity * rate)`. Returns the amount added.
    fn regenerate(&mut self) -> u32;
    fn is_consumed(&self) -> bool;
}

impl ResourceLogic for Resource {
    fn consume(&mut self, amount: u32) -> u32 {
        let taken = amount.min(self.quantity);
        self.quantity -= taken;
        taken
    }

    fn regenerate(&mut self) -> u32 {
        // `as` saturates: negative or NaN products add nothing.
        let added = (f64::from(self.quantity) * self.rate).floor() as u32;
        self.quantity = self.quantity.saturating_add(added);
        added
    }

    fn is_consumed(&self) -> bool {
        self.quantity == 0
    }
}
