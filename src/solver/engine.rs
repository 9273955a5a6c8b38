//! Main Hangman solver interface

use super::{CandidateSet, LetterRank, LetterRanker};
use crate::core::{LetterSet, Pattern, Word};
use crate::session::{GameSession, GameStatus, TransportError};
use std::fmt;

/// How a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameOutcome {
    /// Pattern fully revealed
    Won,
    /// The server stopped the game, e.g. too many wrong guesses
    Lost,
    /// Every letter was tried while the game was still active
    Exhausted,
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Won => "won",
            Self::Lost => "lost",
            Self::Exhausted => "exhausted",
        };
        write!(f, "{name}")
    }
}

/// A single guess in a played game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessStep {
    pub letter: u8,
    pub accepted: bool,
    pub pattern: Pattern,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Everything that happened in one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameReport {
    pub game_id: String,
    pub outcome: GameOutcome,
    /// Pattern after the last guess
    pub pattern: Pattern,
    pub played: LetterSet,
    pub steps: Vec<GuessStep>,
}

impl GameReport {
    /// Guesses that did not reveal anything
    #[must_use]
    pub fn wrong_guesses(&self) -> usize {
        self.steps.iter().filter(|step| !step.accepted).count()
    }

    #[must_use]
    pub fn total_guesses(&self) -> usize {
        self.steps.len()
    }
}

/// Main Hangman solver
///
/// Plays games against any `GameSession` using a fixed dictionary.
pub struct Solver<'a> {
    dictionary: &'a [Word],
    ranker: LetterRanker,
}

impl<'a> Solver<'a> {
    /// Create a new solver
    ///
    /// # Parameters
    /// - `dictionary`: every word the secret may be
    /// - `ranker`: how untried letters are ordered
    #[must_use]
    pub const fn new(dictionary: &'a [Word], ranker: LetterRanker) -> Self {
        Self { dictionary, ranker }
    }

    #[must_use]
    pub const fn dictionary(&self) -> &'a [Word] {
        self.dictionary
    }

    #[must_use]
    pub const fn ranker(&self) -> LetterRanker {
        self.ranker
    }

    /// Start a game and play it to the end
    ///
    /// # Errors
    /// Returns the session's `TransportError`; the game is abandoned.
    pub fn play<G: GameSession>(&self, session: &mut G) -> Result<GameReport, TransportError> {
        self.play_with(session, LetterSet::EMPTY)
    }

    /// Start a game and play it, never guessing any letter in `already_played`
    ///
    /// Makes at most `26 - already_played.len()` guesses.
    ///
    /// # Errors
    /// Returns the session's `TransportError`; the game is abandoned.
    pub fn play_with<G: GameSession>(
        &self,
        session: &mut G,
        already_played: LetterSet,
    ) -> Result<GameReport, TransportError> {
        let start = session.start_game()?;
        let game_id = start.game_id;
        let mut pattern = start.pattern;
        let mut status = start.status;
        let mut played = already_played;

        let mut candidates = CandidateSet::build(self.dictionary, pattern.len());
        if pattern.revealed_count() > 0 {
            candidates = candidates.filter(&pattern);
            // Letters shown at the start are never worth a guess
            for &letter in pattern.cells().iter().flatten() {
                played.insert(letter);
            }
        }
        let mut ranked: LetterRank = self.ranker.rank(&candidates, played);
        let mut steps = Vec::new();

        log::debug!(
            "game {game_id}: {} letters, {} candidates",
            pattern.len(),
            candidates.len()
        );

        while status.is_active() && !pattern.is_complete() {
            let Some(next) = ranked.first() else {
                break;
            };
            let letter = next.letter;
            ranked = ranked.without(letter);
            played.insert(letter);

            let state = session.guess_letter(&game_id, letter)?;
            pattern = state.pattern;
            status = state.status;

            let candidates_before = candidates.len();
            let accepted = pattern.contains(letter);
            if accepted {
                candidates = candidates.filter(&pattern);
                ranked = self.ranker.rank(&candidates, played);
            }

            log::debug!(
                "game {game_id}: guessed '{}' ({}), pattern {pattern}, {candidates_before} -> {} candidates",
                char::from(letter),
                if accepted { "hit" } else { "miss" },
                candidates.len()
            );

            steps.push(GuessStep {
                letter,
                accepted,
                pattern: pattern.clone(),
                candidates_before,
                candidates_after: candidates.len(),
            });
        }

        let outcome = if pattern.is_complete() || status == GameStatus::Won {
            GameOutcome::Won
        } else if status == GameStatus::Lost {
            GameOutcome::Lost
        } else {
            GameOutcome::Exhausted
        };

        log::info!(
            "game {game_id} {outcome} after {} guesses: {pattern}",
            steps.len()
        );

        Ok(GameReport {
            game_id,
            outcome,
            pattern,
            played,
            steps,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{GameState, LocalGame};
    use crate::solver::CountingMode;
    use crate::wordlists::loader::words_from_slice;

    fn local(target: &str, limit: Option<usize>) -> LocalGame {
        LocalGame::new(Word::new(target).unwrap(), limit)
    }

    /// Session that replays canned responses and records every guess
    struct ScriptedSession {
        start: Result<GameState, TransportError>,
        replies: Vec<Result<GameState, TransportError>>,
        guesses: Vec<u8>,
    }

    impl ScriptedSession {
        fn new(start: &str) -> Self {
            Self {
                start: Ok(state(start, GameStatus::Active)),
                replies: Vec::new(),
                guesses: Vec::new(),
            }
        }

        fn reply(mut self, reply: Result<GameState, TransportError>) -> Self {
            self.replies.push(reply);
            self
        }
    }

    impl GameSession for ScriptedSession {
        fn start_game(&mut self) -> Result<GameState, TransportError> {
            std::mem::replace(&mut self.start, Err(TransportError::Rejected("reused".into())))
        }

        fn guess_letter(&mut self, _: &str, letter: u8) -> Result<GameState, TransportError> {
            self.guesses.push(letter);
            if self.replies.is_empty() {
                return Err(TransportError::Rejected("script exhausted".into()));
            }
            self.replies.remove(0)
        }
    }

    fn state(pattern: &str, status: GameStatus) -> GameState {
        GameState {
            game_id: "scripted".to_string(),
            pattern: Pattern::parse(pattern).unwrap(),
            status,
        }
    }

    #[test]
    fn solves_word_in_dictionary() {
        let dictionary = words_from_slice(&["cat", "car", "can", "dog", "cart"]);
        let solver = Solver::new(&dictionary, LetterRanker::default());

        let report = solver.play(&mut local("car", Some(6))).unwrap();

        // a, c hit; t, n miss; r hits
        assert_eq!(report.outcome, GameOutcome::Won);
        assert_eq!(report.pattern.to_string(), "car");
        assert_eq!(report.total_guesses(), 5);
        assert_eq!(report.wrong_guesses(), 2);
    }

    #[test]
    fn first_guess_is_top_ranked_letter() {
        let dictionary = words_from_slice(&["cat", "car", "can"]);
        let solver = Solver::new(&dictionary, LetterRanker::default());

        let report = solver.play(&mut local("car", None)).unwrap();

        // "a" and "c" tie at 3; "a" wins the tie on English frequency
        assert_eq!(report.steps[0].letter, b'a');
        assert!(report.steps[0].accepted);
        assert_eq!(report.steps[0].pattern.to_string(), "_a_");
        assert_eq!(report.steps[0].candidates_after, 3);
    }

    #[test]
    fn rejected_guess_keeps_candidates() {
        let dictionary = words_from_slice(&["cat", "car", "can"]);
        let solver = Solver::new(&dictionary, LetterRanker::default());

        let report = solver.play(&mut local("car", None)).unwrap();

        for step in report.steps.iter().filter(|s| !s.accepted) {
            assert_eq!(step.candidates_before, step.candidates_after);
        }
        assert_eq!(report.outcome, GameOutcome::Won);
    }

    #[test]
    fn never_guesses_a_letter_twice() {
        let dictionary = words_from_slice(&["hangman", "hammock", "bandage", "chapter"]);
        let solver = Solver::new(&dictionary, LetterRanker::default());

        for target in ["hangman", "chapter", "zyzzyva"] {
            let report = solver.play(&mut local(target, None)).unwrap();
            let guessed: LetterSet = report.steps.iter().map(|s| s.letter).collect();
            assert_eq!(guessed.len(), report.steps.len(), "repeat while solving {target}");
        }
    }

    #[test]
    fn word_outside_dictionary_still_wins_without_limit() {
        let dictionary = words_from_slice(&["cat", "car"]);
        let solver = Solver::new(&dictionary, LetterRanker::default());

        let report = solver.play(&mut local("zzz", None)).unwrap();

        assert_eq!(report.outcome, GameOutcome::Won);
        assert!(report.total_guesses() <= 26);
    }

    #[test]
    fn word_outside_dictionary_loses_with_limit() {
        let dictionary = words_from_slice(&["cat", "car", "can"]);
        let solver = Solver::new(&dictionary, LetterRanker::default());

        let report = solver.play(&mut local("zzz", Some(3))).unwrap();

        assert_eq!(report.outcome, GameOutcome::Lost);
        assert_eq!(report.wrong_guesses(), 3);
    }

    #[test]
    fn terminates_within_alphabet() {
        let dictionary = words_from_slice(&["cat", "dog", "bird", "hangman"]);
        let solver = Solver::new(&dictionary, LetterRanker::default());
        let already = LetterSet::from_letters("xyz");

        let mut session = ScriptedSession::new("___");
        for _ in 0..30 {
            session = session.reply(Ok(state("___", GameStatus::Active)));
        }

        let report = solver.play_with(&mut session, already).unwrap();
        assert_eq!(report.total_guesses(), 26 - already.len());
        assert_eq!(report.outcome, GameOutcome::Exhausted);
        assert!(session.guesses.iter().all(|&l| !already.contains(l)));
    }

    #[test]
    fn all_letters_played_is_exhausted() {
        let dictionary = words_from_slice(&["cat"]);
        let solver = Solver::new(&dictionary, LetterRanker::default());
        let mut session = ScriptedSession::new("___");

        let report = solver.play_with(&mut session, LetterSet::FULL).unwrap();

        assert_eq!(report.outcome, GameOutcome::Exhausted);
        assert!(report.steps.is_empty());
        assert!(session.guesses.is_empty());
    }

    #[test]
    fn server_loss_ends_game() {
        let dictionary = words_from_slice(&["cat", "car", "can"]);
        let solver = Solver::new(&dictionary, LetterRanker::default());
        let mut session = ScriptedSession::new("___")
            .reply(Ok(state("___", GameStatus::Active)))
            .reply(Ok(state("___", GameStatus::Lost)));

        let report = solver.play(&mut session).unwrap();

        assert_eq!(report.outcome, GameOutcome::Lost);
        assert_eq!(session.guesses.len(), 2);
    }

    #[test]
    fn server_win_status_ends_game() {
        let dictionary = words_from_slice(&["cat"]);
        let solver = Solver::new(&dictionary, LetterRanker::default());
        let mut session = ScriptedSession::new("___").reply(Ok(state("_a_", GameStatus::Won)));

        let report = solver.play(&mut session).unwrap();
        assert_eq!(report.outcome, GameOutcome::Won);
        assert_eq!(report.steps.len(), 1);
    }

    #[test]
    fn letters_revealed_at_start_are_not_guessed() {
        let dictionary = words_from_slice(&["cat", "car", "can"]);
        let solver = Solver::new(&dictionary, LetterRanker::default());
        let mut session = ScriptedSession::new("_a_")
            .reply(Ok(state("ca_", GameStatus::Active)))
            .reply(Ok(state("ca_", GameStatus::Active)))
            .reply(Ok(state("ca_", GameStatus::Active)))
            .reply(Ok(state("car", GameStatus::Won)));

        let report = solver.play(&mut session).unwrap();

        assert_eq!(report.outcome, GameOutcome::Won);
        assert!(!session.guesses.contains(&b'a'));
        assert_eq!(session.guesses, b"ctnr");
        assert!(report.played.contains(b'a'));
    }

    #[test]
    fn transport_error_aborts_game() {
        let dictionary = words_from_slice(&["cat"]);
        let solver = Solver::new(&dictionary, LetterRanker::default());
        let mut session = ScriptedSession::new("___")
            .reply(Ok(state("_a_", GameStatus::Active)))
            .reply(Err(TransportError::Network("connection reset".into())));

        let result = solver.play(&mut session);
        assert!(matches!(result, Err(TransportError::Network(_))));
        assert_eq!(session.guesses.len(), 2);
    }

    #[test]
    fn start_failure_is_propagated() {
        let dictionary = words_from_slice(&["cat"]);
        let solver = Solver::new(&dictionary, LetterRanker::default());
        let mut session = ScriptedSession::new("___");
        session.start = Err(TransportError::Status {
            code: 503,
            body: "busy".into(),
        });

        assert!(matches!(
            solver.play(&mut session),
            Err(TransportError::Status { code: 503, .. })
        ));
        assert!(session.guesses.is_empty());
    }

    #[test]
    fn candidates_never_grow() {
        let dictionary = words_from_slice(&[
            "letter", "better", "bitter", "butter", "batter", "setter", "matter",
        ]);
        let solver = Solver::new(&dictionary, LetterRanker::new(CountingMode::Words));

        let report = solver.play(&mut local("butter", None)).unwrap();

        assert_eq!(report.outcome, GameOutcome::Won);
        let mut previous = usize::MAX;
        for step in &report.steps {
            assert!(step.candidates_after <= step.candidates_before);
            assert!(step.candidates_before <= previous);
            previous = step.candidates_after;
        }
    }

    #[test]
    fn empty_dictionary_uses_fallback_order() {
        let dictionary: Vec<Word> = vec![];
        let solver = Solver::new(&dictionary, LetterRanker::default());

        let report = solver.play(&mut local("zoo", None)).unwrap();

        let guessed: Vec<u8> = report.steps.iter().map(|s| s.letter).collect();
        assert_eq!(&guessed[..4], b"etao");
        assert_eq!(report.outcome, GameOutcome::Won);
    }
}
