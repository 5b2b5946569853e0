//! Canned reply lines per persona

use persona_domain::PersonaId;
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashMap;

/// Reply for personas without canned lines.
pub const UNKNOWN_PERSONA_REPLY: &str = "对不起，我不太明白你的意思。";

#[derive(Debug, Clone, Default)]
pub struct CannedReplies {
    lines: HashMap<PersonaId, Vec<String>>,
}

impl CannedReplies {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines for the three built-in personas.
    pub fn builtin() -> Self {
        Self::new()
            .with_lines(
                PersonaId::new(1),
                [
                    "当然！闭包是一个函数，它可以记住并访问其词法作用域，即使该函数在其词法作用域之外执行。",
                    "你可以把它想象成一个背包，函数背着它需要的所有变量。",
                    "在JavaScript中，这是实现私有变量的常用方法。",
                ],
            )
            .with_lines(
                PersonaId::new(2),
                [
                    "你问'什么是闭包'，这本身就是一个好问题。但我们是否应该先问，'知识的本质是什么？'",
                    "告诉我，你认为一个'包'是如何'关闭'的？",
                ],
            )
            .with_lines(
                PersonaId::new(3),
                [
                    "啊，闭包！犹如舞台落幕，演员虽已离去，其魂魄仍萦绕于场景之中！",
                    "它是一个函数，怀揣着往昔记忆的宝匣。",
                ],
            )
    }

    /// Set the lines for `persona`. An empty list removes the entry.
    pub fn with_lines<I, S>(mut self, persona: PersonaId, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        if lines.is_empty() {
            self.lines.remove(&persona);
        } else {
            self.lines.insert(persona, lines);
        }
        self
    }

    pub fn lines(&self, persona: PersonaId) -> &[String] {
        self.lines.get(&persona).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Uniform pick from the persona's lines, or [`UNKNOWN_PERSONA_REPLY`].
    pub fn pick<R: Rng + ?Sized>(&self, persona: PersonaId, rng: &mut R) -> String {
        self.lines(persona)
            .choose(rng)
            .cloned()
            .unwrap_or_else(|| UNKNOWN_PERSONA_REPLY.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_pick_stays_within_persona_lines() {
        let replies = CannedReplies::builtin();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let line = replies.pick(PersonaId::new(2), &mut rng);
            assert!(replies.lines(PersonaId::new(2)).contains(&line));
        }
    }

    #[test]
    fn test_unknown_persona_gets_default_line() {
        let replies = CannedReplies::builtin();
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(replies.pick(PersonaId::new(42), &mut rng), UNKNOWN_PERSONA_REPLY);
    }

    #[test]
    fn test_empty_lines_remove_entry() {
        let replies = CannedReplies::builtin().with_lines(PersonaId::new(1), Vec::<String>::new());
        assert!(replies.lines(PersonaId::new(1)).is_empty());
    }
}
