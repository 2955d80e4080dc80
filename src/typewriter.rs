use dioxus::prelude::*;

const TYPE_TICK_MS: u32 = 100;
const DELETE_TICK_MS: u32 = 50;
/// Pause between finishing one word's deletion and typing the next.
const WORD_GAP_MS: u32 = 500;

/// One tick's output: the text to render and the delay before the
/// next tick.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub text: String,
    pub delay_ms: u32,
}

/// Types each word out character by character, holds it for `hold_ms`,
/// deletes it, and moves on to the next word, wrapping around forever.
#[derive(Clone, Debug)]
pub struct Typewriter {
    words: Vec<String>,
    word_index: usize,
    char_index: usize,
    deleting: bool,
    hold_ms: u32,
}

impl Typewriter {
    /// Returns `None` for an empty word list.
    pub fn new(words: Vec<String>, hold_ms: u32) -> Option<Self> {
        if words.is_empty() {
            return None;
        }
        Some(Self {
            words,
            word_index: 0,
            char_index: 0,
            deleting: false,
            hold_ms,
        })
    }

    pub fn tick(&mut self) -> Frame {
        let word = &self.words[self.word_index];
        let word_len = word.chars().count();

        if self.deleting {
            self.char_index = self.char_index.saturating_sub(1);
        } else {
            self.char_index += 1;
        }
        let text: String = word.chars().take(self.char_index).collect();

        let mut delay_ms = if self.deleting {
            DELETE_TICK_MS
        } else {
            TYPE_TICK_MS
        };
        if !self.deleting && self.char_index >= word_len {
            // Word fully typed: hold it, then start deleting.
            delay_ms = self.hold_ms;
            self.deleting = true;
        } else if self.deleting && self.char_index == 0 {
            // Word fully deleted: advance cyclically, short pause.
            self.deleting = false;
            self.word_index = (self.word_index + 1) % self.words.len();
            delay_ms = WORD_GAP_MS;
        }

        Frame { text, delay_ms }
    }
}

/// Renders the rotating role text. The driving task is owned by this
/// component's scope and cancelled when it unmounts.
#[component]
pub fn TypewriterText(words: Vec<String>, hold_ms: u32) -> Element {
    let rendered = use_signal(String::new);

    #[cfg(target_arch = "wasm32")]
    {
        let mut started = use_signal(|| false);
        use_effect(move || {
            if started() {
                return;
            }
            started.set(true);
            let words = words.clone();
            let mut rendered = rendered;
            spawn(async move {
                let Some(mut machine) = Typewriter::new(words, hold_ms) else {
                    return;
                };
                loop {
                    let frame = machine.tick();
                    rendered.set(frame.text);
                    gloo_timers::future::TimeoutFuture::new(frame.delay_ms).await;
                }
            });
        });
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = (&words, hold_ms);

    rsx! {
        span { class: "hero-role", "{rendered}" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn frame(text: &str, delay_ms: u32) -> Frame {
        Frame {
            text: text.to_string(),
            delay_ms,
        }
    }

    #[test]
    fn refuses_empty_word_list() {
        assert!(Typewriter::new(Vec::new(), 2000).is_none());
    }

    #[test]
    fn types_holds_deletes_and_advances() {
        let words = vec!["A".to_string(), "BB".to_string()];
        let mut machine = Typewriter::new(words, 2000).expect("non-empty words");

        // First tick renders the whole one-letter word and holds.
        assert_eq!(machine.tick(), frame("A", 2000));
        // Deletion empties it and advances to the next word.
        assert_eq!(machine.tick(), frame("", 500));
        assert_eq!(machine.tick(), frame("B", 100));
        assert_eq!(machine.tick(), frame("BB", 2000));
    }

    #[test]
    fn wraps_back_to_the_first_word() {
        let words = vec!["A".to_string(), "BB".to_string()];
        let mut machine = Typewriter::new(words, 2000).expect("non-empty words");
        for _ in 0..4 {
            machine.tick();
        }
        // "BB" deletes in two ticks, the second of which wraps.
        assert_eq!(machine.tick(), frame("B", 50));
        assert_eq!(machine.tick(), frame("", 500));
        assert_eq!(machine.tick(), frame("A", 2000));
    }

    #[test]
    fn multibyte_words_never_split_characters() {
        let words = vec!["héllo".to_string()];
        let mut machine = Typewriter::new(words, 1000).expect("non-empty words");
        assert_eq!(machine.tick(), frame("h", 100));
        assert_eq!(machine.tick(), frame("hé", 100));
        assert_eq!(machine.tick(), frame("hél", 100));
    }
}
