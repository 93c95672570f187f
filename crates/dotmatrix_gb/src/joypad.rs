/// Buttons as wired on the two select rows of the 0xFF00 register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Right,
    Left,
    Up,
    Down,
    A,
    B,
    Select,
    Start,
}

impl Button {
    /// (direction row, bit) for the low nibble of 0xFF00.
    fn wiring(self) -> (bool, u8) {
        match self {
            Button::Right => (true, 0x01),
            Button::Left => (true, 0x02),
            Button::Up => (true, 0x04),
            Button::Down => (true, 0x08),
            Button::A => (false, 0x01),
            Button::B => (false, 0x02),
            Button::Select => (false, 0x04),
            Button::Start => (false, 0x08),
        }
    }
}

/// Button matrix behind 0xFF00. The register is active-low: a zeroed
/// select bit picks a row, a zeroed data bit means pressed.
pub(crate) struct Joypad {
    select: u8,
    directions: u8,
    actions: u8,
}

impl Joypad {
    pub(crate) fn new() -> Self {
        Self {
            select: 0x30,
            directions: 0,
            actions: 0,
        }
    }

    pub(crate) fn select_write(&mut self, value: u8) {
        self.select = value & 0x30;
    }

    pub(crate) fn register(&self) -> u8 {
        let mut nibble = 0x0F;
        if self.select & 0x10 == 0 {
            nibble &= !self.directions & 0x0F;
        }
        if self.select & 0x20 == 0 {
            nibble &= !self.actions & 0x0F;
        }
        0xC0 | self.select | nibble
    }

    /// Returns true when the button goes from released to pressed, which
    /// is the edge that requests the Joypad interrupt.
    pub(crate) fn press(&mut self, button: Button) -> bool {
        let (directions, bit) = button.wiring();
        let row = if directions {
            &mut self.directions
        } else {
            &mut self.actions
        };
        let newly = *row & bit == 0;
        *row |= bit;
        newly
    }

    pub(crate) fn release(&mut self, button: Button) {
        let (directions, bit) = button.wiring();
        if directions {
            self.directions &= !bit;
        } else {
            self.actions &= !bit;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unselected_rows_read_all_released() {
        let mut pad = Joypad::new();
        pad.press(Button::A);
        pad.select_write(0x30);
        assert_eq!(pad.register() & 0x0F, 0x0F);
    }

    #[test]
    fn selected_row_reports_pressed_bits_active_low() {
        let mut pad = Joypad::new();
        assert!(pad.press(Button::Start));
        // Holding a button is not a new edge.
        assert!(!pad.press(Button::Start));
        pad.select_write(0x10); // action row selected (bit 5 low)
        assert_eq!(pad.register() & 0x0F, 0x07);
        pad.select_write(0x20); // direction row: Start is invisible
        assert_eq!(pad.register() & 0x0F, 0x0F);
    }
}
