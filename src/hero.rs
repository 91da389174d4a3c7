//! Hero section animation: the typing headline, ambient particles, and the
//! count-up used by the about section.

use std::time::Duration;

use crate::config::hero::{TYPING_STEP_MS, WORD_HOLD_MS};

/// Types each word out one character at a time, holds it, then clears it
/// and moves to the next word.
#[derive(Debug, Clone)]
pub struct Typewriter {
    words: &'static [&'static str],
    word: usize,
    typed: usize,
}

impl Typewriter {
    pub fn new(words: &'static [&'static str]) -> Self {
        Self {
            words,
            word: 0,
            typed: 0,
        }
    }

    fn current_word(&self) -> &'static str {
        self.words.get(self.word).copied().unwrap_or_default()
    }

    /// The visible prefix of the current word.
    pub fn text(&self) -> &'static str {
        let word = self.current_word();
        let end = word
            .char_indices()
            .nth(self.typed)
            .map(|(i, _)| i)
            .unwrap_or(word.len());
        &word[..end]
    }

    pub fn word_index(&self) -> usize {
        self.word
    }

    fn is_complete(&self) -> bool {
        self.typed >= self.current_word().chars().count()
    }

    /// How long to wait before the next [`advance`](Self::advance).
    pub fn next_delay(&self) -> Duration {
        if self.is_complete() {
            Duration::from_millis(WORD_HOLD_MS)
        } else {
            Duration::from_millis(TYPING_STEP_MS)
        }
    }

    pub fn advance(&mut self) {
        if self.words.is_empty() {
            return;
        }
        if self.is_complete() {
            self.typed = 0;
            self.word = (self.word + 1) % self.words.len();
        } else {
            self.typed += 1;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    /// Scale applied to the `w-1 h-1` dot.
    pub size: f64,
    pub speed_x: f64,
    pub speed_y: f64,
    pub opacity: f64,
}

impl Particle {
    /// Inline style placing and scaling the dot.
    pub fn style(&self) -> String {
        format!(
            "left: {}px; top: {}px; opacity: {}; transform: scale({}); transition: all 0.05s linear;",
            self.x, self.y, self.opacity, self.size,
        )
    }

    fn step(&mut self, width: f64, height: f64) {
        self.x = wrap(self.x + self.speed_x, width);
        self.y = wrap(self.y + self.speed_y, height);
    }
}

fn wrap(value: f64, max: f64) -> f64 {
    if value > max {
        0.0
    } else if value < 0.0 {
        max
    } else {
        value
    }
}

/// Drifting background dots that wrap around the viewport edges.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    /// Scatters `count` particles over a `width` x `height` viewport.
    ///
    /// `random` yields values in `[0, 1)`; the browser passes `Math.random`.
    pub fn generate(
        count: usize,
        width: f64,
        height: f64,
        random: &mut impl FnMut() -> f64,
    ) -> Self {
        let particles = (0..count)
            .map(|_| Particle {
                x: random() * width,
                y: random() * height,
                size: random() * 3.0 + 1.0,
                speed_x: (random() - 0.5) * 0.5,
                speed_y: (random() - 0.5) * 0.5,
                opacity: random() * 0.5 + 0.2,
            })
            .collect();
        Self { particles }
    }

    pub fn advance(&mut self, width: f64, height: f64) {
        for particle in &mut self.particles {
            particle.step(width, height);
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }
}

/// Value of a linear count from zero to `end` after `elapsed`.
pub fn count_up(end: u32, elapsed: Duration, duration: Duration) -> u32 {
    if duration.is_zero() {
        return end;
    }
    let progress = (elapsed.as_secs_f64() / duration.as_secs_f64()).min(1.0);
    (progress * f64::from(end)).floor() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORDS: &[&str] = &["ab", "xyz"];

    fn ms(ms: u64) -> Duration {
        Duration::from_millis(ms)
    }

    #[test]
    fn test_typewriter_types_then_holds() {
        let mut t = Typewriter::new(WORDS);
        assert_eq!(t.text(), "");
        assert_eq!(t.next_delay(), ms(100));
        t.advance();
        assert_eq!(t.text(), "a");
        t.advance();
        assert_eq!(t.text(), "ab");
        assert_eq!(t.next_delay(), ms(2000));
        t.advance();
        assert_eq!(t.text(), "");
        assert_eq!(t.word_index(), 1);
    }

    #[test]
    fn test_typewriter_wraps_to_first_word() {
        let mut t = Typewriter::new(WORDS);
        // 2 chars + clear, then 3 chars + clear
        for _ in 0..7 {
            t.advance();
        }
        assert_eq!(t.word_index(), 0);
        assert_eq!(t.text(), "");
    }

    #[test]
    fn test_typewriter_handles_multibyte() {
        let mut t = Typewriter::new(&["héllo"]);
        t.advance();
        t.advance();
        assert_eq!(t.text(), "hé");
    }

    #[test]
    fn test_typewriter_without_words() {
        let mut t = Typewriter::new(&[]);
        t.advance();
        assert_eq!(t.text(), "");
    }

    #[test]
    fn test_particles_generated_in_range() {
        let mut n = 0.0;
        let mut random = || {
            n = (n + 0.37) % 1.0;
            n
        };
        let field = ParticleField::generate(50, 800.0, 600.0, &mut random);
        assert_eq!(field.particles().len(), 50);
        for p in field.particles() {
            assert!((0.0..800.0).contains(&p.x));
            assert!((0.0..600.0).contains(&p.y));
            assert!((1.0..4.0).contains(&p.size));
            assert!((-0.25..0.25).contains(&p.speed_x));
            assert!((0.2..0.7).contains(&p.opacity));
        }
    }

    #[test]
    fn test_particles_move_and_wrap() {
        let mut field = ParticleField {
            particles: vec![
                Particle {
                    x: 10.0,
                    y: 10.0,
                    size: 1.0,
                    speed_x: 0.25,
                    speed_y: -0.25,
                    opacity: 0.5,
                },
                Particle {
                    x: 99.9,
                    y: 0.1,
                    size: 1.0,
                    speed_x: 0.25,
                    speed_y: -0.25,
                    opacity: 0.5,
                },
            ],
        };
        field.advance(100.0, 50.0);
        let [a, b] = field.particles() else {
            panic!("expected two particles");
        };
        assert_eq!((a.x, a.y), (10.25, 9.75));
        assert_eq!((b.x, b.y), (0.0, 50.0));
    }

    #[test]
    fn test_particle_size_scales_the_dot() {
        let p = Particle {
            x: 10.0,
            y: 20.0,
            size: 2.5,
            speed_x: 0.0,
            speed_y: 0.0,
            opacity: 0.4,
        };
        let style = p.style();
        assert!(style.contains("transform: scale(2.5)"));
        assert!(style.contains("left: 10px; top: 20px"));
        assert!(!style.contains("width"));
    }

    #[test]
    fn test_count_up_progress() {
        assert_eq!(count_up(5, ms(0), ms(2000)), 0);
        assert_eq!(count_up(5, ms(1000), ms(2000)), 2);
        assert_eq!(count_up(5, ms(2000), ms(2000)), 5);
        assert_eq!(count_up(5, ms(9000), ms(2000)), 5);
        assert_eq!(count_up(5, ms(10), ms(0)), 5);
    }
}
