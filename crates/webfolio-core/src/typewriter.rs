//! Typed hero text.
//!
//! Types each title one character at a time, holds it, backspaces it, and
//! moves on to the next. The caller renders [`Typewriter::text`] and waits
//! the returned delay before calling [`Typewriter::step`] again.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Typing speeds and pauses, in milliseconds
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypingConfig {
    /// Delay after each typed character
    pub type_speed_ms: u64,
    /// Delay after each erased character
    pub back_speed_ms: u64,
    /// Hold on a fully typed title before erasing
    pub back_delay_ms: u64,
    /// Pause before the first character
    pub start_delay_ms: u64,
    /// Start over after the last title instead of stopping on it
    pub looping: bool,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            type_speed_ms: 80,
            back_speed_ms: 40,
            back_delay_ms: 2000,
            start_delay_ms: 1000,
            looping: true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Starting,
    Typing,
    Erasing,
    Finished,
}

/// Frame-by-frame typing animation over a list of titles
#[derive(Clone, Debug)]
pub struct Typewriter {
    titles: Vec<Vec<char>>,
    config: TypingConfig,
    word: usize,
    shown: usize,
    phase: Phase,
}

impl Typewriter {
    pub fn new(titles: &[String], config: TypingConfig) -> CoreResult<Self> {
        if titles.is_empty() {
            return Err(CoreError::MissingElement("typed titles".to_string()));
        }
        Ok(Self {
            titles: titles.iter().map(|t| t.chars().collect()).collect(),
            config,
            word: 0,
            shown: 0,
            phase: Phase::Starting,
        })
    }

    /// Currently visible prefix of the current title
    pub fn text(&self) -> String {
        self.titles[self.word][..self.shown].iter().collect()
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    /// Advance one frame. Returns the delay before the next frame, or
    /// `None` once a non-looping animation has settled on its last title.
    pub fn step(&mut self) -> Option<Duration> {
        let ms = match self.phase {
            Phase::Starting => {
                self.phase = Phase::Typing;
                self.config.start_delay_ms
            }
            Phase::Typing => {
                let len = self.titles[self.word].len();
                if self.shown < len {
                    self.shown += 1;
                }
                if self.shown < len {
                    self.config.type_speed_ms
                } else if !self.config.looping && self.word + 1 == self.titles.len() {
                    self.phase = Phase::Finished;
                    return None;
                } else {
                    self.phase = Phase::Erasing;
                    self.config.back_delay_ms
                }
            }
            Phase::Erasing => {
                self.shown = self.shown.saturating_sub(1);
                if self.shown == 0 {
                    self.word = (self.word + 1) % self.titles.len();
                    self.phase = Phase::Typing;
                }
                self.config.back_speed_ms
            }
            Phase::Finished => return None,
        };
        Some(Duration::from_millis(ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(list: &[&str]) -> Vec<String> {
        list.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn types_holds_and_erases() {
        let mut tw = Typewriter::new(&titles(&["ab", "c"]), TypingConfig::default()).unwrap();

        assert_eq!(tw.step(), Some(Duration::from_millis(1000)));
        assert_eq!(tw.text(), "");

        assert_eq!(tw.step(), Some(Duration::from_millis(80)));
        assert_eq!(tw.text(), "a");

        // Title complete: hold before erasing
        assert_eq!(tw.step(), Some(Duration::from_millis(2000)));
        assert_eq!(tw.text(), "ab");

        assert_eq!(tw.step(), Some(Duration::from_millis(40)));
        assert_eq!(tw.text(), "a");
        assert_eq!(tw.step(), Some(Duration::from_millis(40)));
        assert_eq!(tw.text(), "");

        // Next title
        tw.step();
        assert_eq!(tw.text(), "c");
    }

    #[test]
    fn loops_back_to_first_title() {
        let mut tw = Typewriter::new(&titles(&["x"]), TypingConfig::default()).unwrap();
        tw.step(); // start
        tw.step(); // "x", hold
        tw.step(); // erase
        assert_eq!(tw.text(), "");
        tw.step();
        assert_eq!(tw.text(), "x");
        assert!(!tw.is_finished());
    }

    #[test]
    fn non_looping_stops_on_last_title() {
        let config = TypingConfig {
            looping: false,
            ..TypingConfig::default()
        };
        let mut tw = Typewriter::new(&titles(&["hi"]), config).unwrap();
        tw.step();
        tw.step();
        assert_eq!(tw.step(), None);
        assert_eq!(tw.text(), "hi");
        assert!(tw.is_finished());
        assert_eq!(tw.step(), None);
    }

    #[test]
    fn multibyte_titles_step_by_char() {
        let mut tw = Typewriter::new(&titles(&["né"]), TypingConfig::default()).unwrap();
        tw.step();
        tw.step();
        tw.step();
        assert_eq!(tw.text(), "né");
    }

    #[test]
    fn empty_titles_rejected() {
        let result = Typewriter::new(&[], TypingConfig::default());
        assert!(matches!(result, Err(CoreError::MissingElement(_))));
    }
}
