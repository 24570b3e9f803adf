// display preferences
//
// only dark mode for now, which starts on
#[derive(Debug)]
pub struct PreferencesState {
    dark_mode: bool,
}

impl Default for PreferencesState {
    fn default() -> Self {
        PreferencesState { dark_mode: true }
    }
}

impl PreferencesState {
    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    // returns the new value
    pub fn toggle(&mut self) -> bool {
        self.dark_mode = !self.dark_mode;
        self.dark_mode
    }
}
