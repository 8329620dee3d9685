// ============================================================================
// Calculator
// Key presses in, display and history text out
// ============================================================================

use super::display::{error_message, DisplayFormatter};
use super::entry::DigitBuffer;
use crate::domain::{ActionTag, EngineConfig, OperationKind};
use crate::engine::{create_from_config, Sequencer};
use crate::interfaces::{EventHandler, NumberEntry};
use crate::numeric::{ArithError, ArithResult};
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One key of the calculator keypad
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Key {
    Digit(u8),
    DecimalPoint,
    Action(OperationKind),
}

/// What the user sees after a key press
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Screen {
    pub display: String,
    pub history: String,
}

/// Action dispatch boundary around one [`Sequencer`].
///
/// Owns the number being typed and turns every engine result or error into
/// text. An error message is a transient overlay: Clear, ClearEntered,
/// Backspace or a second "=" dismiss it together with the history line,
/// any other key simply replaces it.
pub struct Calculator<E: NumberEntry = DigitBuffer> {
    engine: Sequencer,
    entry: E,
    formatter: DisplayFormatter,
    display: String,
    history: String,

    /// Error currently overlaid on the display
    error: Option<ArithError>,

    /// Action of the previous key, `None` after a digit
    last_action: Option<ActionTag>,
}

impl Calculator<DigitBuffer> {
    /// Calculator with the default digit buffer
    pub fn from_config(
        config: EngineConfig,
        event_handler: Arc<dyn EventHandler>,
    ) -> Result<Self, String> {
        let engine = create_from_config(config, event_handler)?;
        let entry = DigitBuffer::new(config.display.max_input_digits);
        Ok(Self::new(engine, entry, DisplayFormatter::new(config.display)))
    }
}

impl<E: NumberEntry> Calculator<E> {
    pub fn new(engine: Sequencer, entry: E, formatter: DisplayFormatter) -> Self {
        Self {
            engine,
            entry,
            formatter,
            display: "0".to_string(),
            history: String::new(),
            error: None,
            last_action: None,
        }
    }

    pub fn engine(&self) -> &Sequencer {
        &self.engine
    }

    pub fn entry(&self) -> &E {
        &self.entry
    }

    pub fn screen(&self) -> Screen {
        Screen {
            display: self.display.clone(),
            history: self.history.clone(),
        }
    }

    /// Error currently shown instead of a number, if any
    pub fn error(&self) -> Option<ArithError> {
        self.error
    }

    /// Formatted memory value, `None` when memory is empty
    pub fn memory_display(&self) -> Option<String> {
        self.engine.memory().map(|value| self.formatter.format(value))
    }

    /// Press one key
    pub fn press(&mut self, key: Key) -> Screen {
        match key {
            Key::Digit(digit) => self.press_digit(Some(digit)),
            Key::DecimalPoint => self.press_digit(None),
            Key::Action(action) => self.press_action(action),
        }
        self.screen()
    }

    /// Press a sequence of keys, returning the final screen
    pub fn press_all<I>(&mut self, keys: I) -> Screen
    where
        I: IntoIterator<Item = Key>,
    {
        for key in keys {
            self.press(key);
        }
        self.screen()
    }

    // ========================================================================
    // Digits
    // ========================================================================

    fn press_digit(&mut self, digit: Option<u8>) {
        if self.error.take().is_some() {
            self.entry.start_fresh();
        }
        if !self.entry.has_number() {
            self.engine.begin_entry();
        }

        let accepted = match digit {
            Some(digit) => self.entry.push_digit(digit),
            None => self.entry.push_decimal_point(),
        };
        if !accepted {
            tracing::trace!(text = self.entry.text(), "entry full, key ignored");
        }

        self.display = self.formatter.format_entry(self.entry.text());
        self.history = self.formatter.history_line(self.engine.history());
        self.last_action = None;
    }

    // ========================================================================
    // Actions
    // ========================================================================

    fn press_action(&mut self, action: OperationKind) {
        let tag = action.tag();
        let overlay_shown = self.error.is_some();

        let outcome = match action {
            OperationKind::ClearEntered => self.clear_entered(),
            OperationKind::Backspace => self.backspace(overlay_shown),
            OperationKind::Negate if self.entry.can_negate() => {
                self.entry.negate();
                self.display = self.formatter.format_entry(self.entry.text());
                Ok(())
            },
            _ => self.evaluate(action),
        };

        match outcome {
            Ok(()) => self.error = None,
            Err(error) => {
                self.entry.start_fresh();
                self.display = error_message(error).to_string();
                self.error = Some(error);
            },
        }

        let dismisses_overlay = tag.is_clearing()
            || (tag == ActionTag::Enter && self.last_action == Some(ActionTag::Enter));
        if (overlay_shown || self.error.is_some()) && dismisses_overlay {
            self.history.clear();
            self.error = None;
        } else {
            self.history = self.formatter.history_line(self.engine.history());
        }
        self.last_action = Some(tag);
    }

    fn evaluate(&mut self, action: OperationKind) -> ArithResult<()> {
        let memory_key = matches!(action, OperationKind::Memory(_));
        let typed = self.entry.current();
        let result = self.engine.apply(action, typed)?;

        match self.engine.pending_input() {
            Some(shown) if memory_key => self.entry.load(shown),
            _ => self.entry.start_fresh(),
        }
        self.display = self.formatter.format(&result);
        Ok(())
    }

    fn clear_entered(&mut self) -> ArithResult<()> {
        self.entry.start_fresh();
        self.engine.apply(OperationKind::ClearEntered, None)?;
        self.display = "0".to_string();
        Ok(())
    }

    fn backspace(&mut self, overlay_shown: bool) -> ArithResult<()> {
        if self.engine.backspace_allowed(self.entry.has_number()) {
            self.entry.backspace();
            self.display = self.formatter.format_entry(self.entry.text());
        } else if overlay_shown {
            self.display = "0".to_string();
        }
        self.engine.apply(OperationKind::Backspace, None)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BinaryOp, DisplayConfig, ExtraOp, MemoryOp};
    use crate::interfaces::NoOpEventHandler;

    fn calculator() -> Calculator {
        Calculator::from_config(EngineConfig::invariant(), Arc::new(NoOpEventHandler)).unwrap()
    }

    /// Parse a compact key script: digits, `.`, `+ - * /`, `=`, `%`,
    /// `n` negate, `r` sqrt, `s` square, `i` reciprocal, `c` clear,
    /// `e` clear entry, `b` backspace, `M` store, `R` recall, `P` m+, `Q` m-
    fn keys(script: &str) -> Vec<Key> {
        script
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| match c {
                '0'..='9' => Key::Digit(c.to_digit(10).unwrap() as u8),
                '.' => Key::DecimalPoint,
                '+' => Key::Action(OperationKind::Binary(BinaryOp::Add)),
                '-' => Key::Action(OperationKind::Binary(BinaryOp::Subtract)),
                '*' => Key::Action(OperationKind::Binary(BinaryOp::Multiply)),
                '/' => Key::Action(OperationKind::Binary(BinaryOp::Divide)),
                '=' => Key::Action(OperationKind::Enter),
                '%' => Key::Action(OperationKind::Percent),
                'n' => Key::Action(OperationKind::Negate),
                'r' => Key::Action(OperationKind::Extra(ExtraOp::Sqrt)),
                's' => Key::Action(OperationKind::Extra(ExtraOp::Square)),
                'i' => Key::Action(OperationKind::Extra(ExtraOp::Reciprocal)),
                'c' => Key::Action(OperationKind::Clear),
                'e' => Key::Action(OperationKind::ClearEntered),
                'b' => Key::Action(OperationKind::Backspace),
                'M' => Key::Action(OperationKind::Memory(MemoryOp::Store)),
                'R' => Key::Action(OperationKind::Memory(MemoryOp::Recall)),
                'P' => Key::Action(OperationKind::Memory(MemoryOp::Add)),
                'Q' => Key::Action(OperationKind::Memory(MemoryOp::Subtract)),
                other => panic!("unknown key {other}"),
            })
            .collect()
    }

    fn run(script: &str) -> Screen {
        calculator().press_all(keys(script))
    }

    #[test]
    fn test_initial_screen() {
        let screen = calculator().screen();
        assert_eq!(screen.display, "0");
        assert_eq!(screen.history, "");
    }

    #[test]
    fn test_typing_shows_grouped_entry() {
        let screen = run("1234.50");
        assert_eq!(screen.display, "1,234.50");
    }

    #[test]
    fn test_simple_expression() {
        let screen = run("12 + 30");
        assert_eq!(screen.display, "30");
        assert_eq!(screen.history, "12 +");

        let screen = run("12 + 30 =");
        assert_eq!(screen.display, "42");
        assert_eq!(screen.history, "");
    }

    #[test]
    fn test_repeat_equals() {
        assert_eq!(run("2 + 3 = = =").display, "11");
    }

    #[test]
    fn test_extra_history() {
        let screen = run("16 r r");
        assert_eq!(screen.display, "2");
        assert_eq!(screen.history, "sqrt( sqrt( 16 ) )");
    }

    #[test]
    fn test_digit_after_extra_discards_run() {
        let screen = run("25 r 16 r +");
        assert_eq!(screen.display, "4");
        assert_eq!(screen.history, "sqrt( 16 ) +");
    }

    #[test]
    fn test_percent() {
        let screen = run("20 + 10 %");
        assert_eq!(screen.display, "2");
        assert_eq!(screen.history, "20 + 2");
    }

    #[test]
    fn test_negate_typed_number() {
        let screen = run("5 n");
        assert_eq!(screen.display, "-5");
        assert_eq!(screen.history, "");
        assert_eq!(run("5 n + 1 =").display, "-4");
    }

    #[test]
    fn test_negate_typed_zero_goes_to_history() {
        let screen = run("0 n n n");
        assert_eq!(screen.display, "0");
        assert_eq!(screen.history, "negate( negate( negate( 0 ) ) )");

        let screen = run("0.0 n");
        assert_eq!(screen.display, "0");
        assert_eq!(screen.history, "negate( 0 )");

        let screen = run("5 + 0 n");
        assert_eq!(screen.history, "5 + negate( 0 )");
        assert_eq!(run("5 + 0 n =").display, "5");
    }

    #[test]
    fn test_divide_by_zero_overlay() {
        let mut calc = calculator();
        let screen = calc.press_all(keys("5 / 0 ="));
        assert_eq!(screen.display, "Cannot divide by zero");
        assert_eq!(screen.history, "5 ÷");
        assert_eq!(calc.error(), Some(ArithError::DivideByZero));

        // A second "=" dismisses the overlay and finishes "5 ÷" with 5
        let screen = calc.press_all(keys("="));
        assert_eq!(screen.display, "1");
        assert_eq!(screen.history, "");
        assert_eq!(calc.error(), None);
    }

    #[test]
    fn test_overlay_cleared_by_digit() {
        let mut calc = calculator();
        calc.press_all(keys("5 / 0 ="));
        let screen = calc.press_all(keys("2 ="));
        assert_eq!(screen.display, "2.5");
    }

    #[test]
    fn test_overlay_cleared_by_backspace() {
        let mut calc = calculator();
        let screen = calc.press_all(keys("9 n r"));
        assert_eq!(screen.display, "Invalid input");

        let screen = calc.press_all(keys("b"));
        assert_eq!(screen.display, "0");
        assert_eq!(screen.history, "");
    }

    #[test]
    fn test_zero_over_zero_message() {
        assert_eq!(run("0 / 0 =").display, "Result is undefined");
    }

    #[test]
    fn test_overflow_message() {
        // 10^(2^13) is shown in full, squaring it again reaches the bound
        let mut calc = calculator();
        let screen = calc.press_all(keys(&format!("10 {}", "s".repeat(13))));
        assert_eq!(screen.display.len(), 8193 + 8192 / 3);
        assert!(screen.display.starts_with("100,000,"));

        let screen = calc.press_all(keys("s"));
        assert_eq!(screen.display, "Overflow");
        assert_eq!(calc.error(), Some(ArithError::Overflow));
    }

    #[test]
    fn test_large_square_shown_in_full() {
        let screen = run("256 s s s s");
        assert_eq!(screen.display, "340,282,366,920,938,463,463,374,607,431,768,211,456");
        assert_eq!(screen.history, "sqr( sqr( sqr( sqr( 256 ) ) ) )");
    }

    #[test]
    fn test_clear_entered() {
        let screen = run("5 + 3 e");
        assert_eq!(screen.display, "0");
        assert_eq!(screen.history, "5 +");
        assert_eq!(run("5 + 3 e 2 =").display, "7");
    }

    #[test]
    fn test_backspace_edits_entry_only() {
        assert_eq!(run("123 b").display, "12");
        assert_eq!(run("123 b b b").display, "0");

        // Not after an operator: the shown value is a result
        let screen = run("12 + 3 + b");
        assert_eq!(screen.display, "15");
    }

    #[test]
    fn test_memory_round_trip() {
        let mut calc = calculator();
        calc.press_all(keys("7 M c"));
        assert_eq!(calc.memory_display(), Some("7".to_string()));

        let screen = calc.press_all(keys("R + 1 ="));
        assert_eq!(screen.display, "8");
    }

    #[test]
    fn test_memory_add_subtract() {
        let mut calc = calculator();
        calc.press_all(keys("5 P P 3 Q"));
        assert_eq!(calc.memory_display(), Some("7".to_string()));
    }

    #[test]
    fn test_recalled_value_replaced_by_typing() {
        let screen = run("4 M c R 9 + 1 =");
        assert_eq!(screen.display, "10");
    }

    #[test]
    fn test_classic_separators() {
        let mut calc: Calculator =
            Calculator::from_config(EngineConfig::classic(), Arc::new(NoOpEventHandler)).unwrap();
        let screen = calc.press_all(keys("1234.5 * 2 ="));
        assert_eq!(screen.display, "2 469");
    }

    #[test]
    fn test_input_limit_from_config() {
        let config = EngineConfig::invariant().with_display(DisplayConfig {
            max_input_digits: 3,
            ..DisplayConfig::invariant()
        });
        let mut calc: Calculator = Calculator::from_config(config, Arc::new(NoOpEventHandler)).unwrap();
        assert_eq!(calc.press_all(keys("12345")).display, "123");
    }

    // ========================================================================
    // Scenario Tables (classic separators)
    // ========================================================================

    /// (keys, display, history) with keys written as space-separated tokens
    type Scenario = (&'static str, &'static str, &'static str);

    const BINARY_SCENARIOS: &[Scenario] = &[
        ("2 + 2 =", "4", ""),
        ("2 - 2 =", "0", ""),
        ("2 * 2 =", "4", ""),
        ("2 / 2 =", "1", ""),
        ("0 + = = =", "0", ""),
        ("1 + = = =", "4", ""),
        ("2 + = = =", "8", ""),
        ("13 + = = =", "52", ""),
        ("9999 + = = =", "39 996", ""),
        ("0 - = = =", "0", ""),
        ("1 - = = =", "-2", ""),
        ("2 - = = =", "-4", ""),
        ("13 - = = =", "-26", ""),
        ("9999 - = = =", "-19 998", ""),
        ("0 * = = =", "0", ""),
        ("1 * = = =", "1", ""),
        ("2 * = = =", "16", ""),
        ("13 * = = =", "28 561", ""),
        ("9999 * = = =", "9 996 000 599 960 001", ""),
        ("1 / = = =", "1", ""),
        ("2 / = = =", "0,25", ""),
        ("13 / = = =", "0,0059171597633136", ""),
        ("0,2 + 0,2 =", "0,4", ""),
        ("0,2 neg + 0,2 =", "0", ""),
        ("2 + 3 + = =", "15", ""),
        ("2 - 3 - = =", "1", ""),
        ("2 * 3 * = =", "216", ""),
        ("2 / 3 / = =", "1,4999999999999999", ""),
        ("1 + 2 + 3 = =", "9", ""),
        ("1 - 2 - 3 = =", "-7", ""),
        ("1 * 2 * 3 = =", "18", ""),
        ("1 / 2 / 3 = =", "0,0555555555555556", ""),
        ("1 + 2 + 3 + 4 = =", "14", ""),
        ("2 + 3 + 4 + 5 = =", "19", ""),
        ("101 + 102 + 103 + 104 = =", "514", ""),
        ("102 + 103 + 104 + 105 = =", "519", ""),
        ("1 neg + 2 neg + 3 neg + 4 neg = =", "-14", ""),
        ("2 neg + 3 neg + 4 neg + 5 neg = =", "-19", ""),
        ("101 neg + 102 neg + 103 neg + 104 neg = =", "-514", ""),
        ("102 neg + 103 neg + 104 neg + 105 neg = =", "-519", ""),
        ("1 neg + 2 + 3 neg + 4 = =", "6", ""),
        ("2 + 3 neg + 4 + 5 neg = =", "-7", ""),
        ("101 neg + 102 + 103 neg + 104 = =", "106", ""),
        ("102 + 103 neg + 104 + 105 neg = =", "-107", ""),
        ("1 - 2 - 3 - 4 = =", "-12", ""),
        ("2 - 3 - 4 - 5 = =", "-15", ""),
        ("101 - 102 - 103 - 104 = =", "-312", ""),
        ("102 - 103 - 104 - 105 = =", "-315", ""),
        ("1 neg - 2 neg - 3 neg - 4 neg = =", "12", ""),
        ("2 neg - 3 neg - 4 neg - 5 neg = =", "15", ""),
        ("101 neg - 102 neg - 103 neg - 104 neg = =", "312", ""),
        ("102 neg - 103 neg - 104 neg - 105 neg = =", "315", ""),
        ("1 neg - 2 - 3 neg - 4 = =", "-8", ""),
        ("2 - 3 neg - 4 - 5 neg = =", "11", ""),
        ("101 neg - 102 - 103 neg - 104 = =", "-308", ""),
        ("102 - 103 neg - 104 - 105 neg = =", "311", ""),
        ("1 * 2 * 3 * 4 = =", "96", ""),
        ("2 * 3 * 4 * 5 = =", "600", ""),
        ("101 * 102 * 103 * 104 = =", "11 476 922 496", ""),
        ("102 * 103 * 104 * 105 = =", "12 046 179 600", ""),
        ("1 neg * 2 neg * 3 neg * 4 neg = =", "-96", ""),
        ("2 neg * 3 neg * 4 neg * 5 neg = =", "-600", ""),
        ("101 neg * 102 neg * 103 neg * 104 neg = =", "-11 476 922 496", ""),
        ("102 neg * 103 neg * 104 neg * 105 neg = =", "-12 046 179 600", ""),
        ("1 neg * 2 * 3 neg * 4 = =", "96", ""),
        ("2 * 3 neg * 4 * 5 neg = =", "-600", ""),
        ("101 neg * 102 * 103 neg * 104 = =", "11 476 922 496", ""),
        ("102 * 103 neg * 104 * 105 neg = =", "-12 046 179 600", ""),
        ("1 / 2 / 3 / 4 = =", "0,0104166666666667", ""),
        ("2 / 3 / 4 / 5 = =", "0,0066666666666667", ""),
        ("1 neg / 2 neg / 3 neg / 4 neg = =", "-0,0104166666666667", ""),
        ("2 neg / 3 neg / 4 neg / 5 neg = =", "-0,0066666666666667", ""),
        ("1 neg / 2 / 3 neg / 4 = =", "0,0104166666666667", ""),
        ("2 / 3 neg / 4 / 5 neg = =", "-0,0066666666666667", ""),
        ("25 + 25 + 25 * 25 * 25 = =", "1 171 875", ""),
    ];

    const EXTRA_SCENARIOS: &[Scenario] = &[
        ("4 sqrt + = =", "6", ""),
        ("25 sqrt + = =", "15", ""),
        ("1 neg + = =", "-3", ""),
        ("1 neg - = =", "1", ""),
        ("1 neg * = =", "-1", ""),
        ("1 neg / = =", "-1", ""),
        ("0 sqrt sqrt sqrt = =", "0", ""),
        ("1 sqrt sqrt sqrt = =", "1", ""),
        ("16 sqrt sqrt sqrt = =", "1,414213562373095", ""),
        ("256 sqrt sqrt sqrt = =", "2", ""),
        ("0 sqr sqr sqr = =", "0", ""),
        ("0 sqr sqr sqr", "0", "sqr( sqr( sqr( 0 ) ) )"),
        ("1 sqr sqr sqr = =", "1", ""),
        ("1 sqr sqr sqr", "1", "sqr( sqr( sqr( 1 ) ) )"),
        ("16 sqr sqr sqr = =", "4 294 967 296", ""),
        ("16 sqr sqr sqr", "4 294 967 296", "sqr( sqr( sqr( 16 ) ) )"),
        ("256 sqr sqr sqr = =", "18 446 744 073 709 551 616", ""),
        ("0 neg neg neg", "0", "negate( negate( negate( 0 ) ) )"),
        ("1 neg neg neg = =", "-1", ""),
        ("16 neg neg neg = =", "-16", ""),
        ("256 neg neg neg = =", "-256", ""),
        ("25 sqrt 16 sqrt +", "4", "sqrt( 16 ) +"),
        ("25 sqrt + - * /", "5", "sqrt( 25 ) ÷"),
        ("25 sqrt + 16 sqrt = =", "13", ""),
        ("25 sqrt + 16 sqrt + = =", "27", ""),
        ("16 sqrt + sqrt = =", "8", ""),
        ("1 + 2 sqr * 3 = =", "45", ""),
        ("1 + 4 sqrt * 3 = =", "27", ""),
        ("1 + 4 1/x * 3 = =", "11,25", ""),
    ];

    const PERCENT_SCENARIOS: &[Scenario] = &[
        ("%", "0", "0"),
        ("1 %", "0", "0"),
        ("20 %", "0", "0"),
        ("20 + 10 % = =", "24", ""),
        ("20 + 10 %", "2", "20 + 2"),
        ("20 - 10 % = =", "16", ""),
        ("20 - 10 %", "2", "20 - 2"),
        ("20 * 10 % = =", "80", ""),
        ("20 * 10 %", "2", "20 × 2"),
        ("20 / 10 % = =", "5", ""),
        ("20 / 10 %", "2", "20 ÷ 2"),
        ("20 + % = =", "28", ""),
        ("20 + %", "4", "20 + 4"),
        ("20 - % = =", "12", ""),
        ("20 - %", "4", "20 - 4"),
        ("20 * % = =", "320", ""),
        ("20 * %", "4", "20 × 4"),
        ("20 / % = =", "1,25", ""),
        ("20 / %", "4", "20 ÷ 4"),
        ("20 + 10 % + 15 % = =", "28,6", ""),
        ("20 - 10 % - 15 % = =", "12,6", ""),
        ("20 * 10 % * 15 % = =", "1 440", ""),
        ("20 / 10 % / 15 % = =", "4,4444444444444445", ""),
        ("20 + 10 % + = =", "66", ""),
        ("20 - 10 % - = =", "-18", ""),
        ("20 * 10 % * = =", "64 000", ""),
        ("20 / 10 % / = =", "0,1", ""),
        ("0 % % %", "0", "0"),
    ];

    fn session_keys(script: &str) -> Vec<Key> {
        let mut keys = Vec::new();
        for token in script.split_whitespace() {
            let action = match token {
                "+" => OperationKind::Binary(BinaryOp::Add),
                "-" => OperationKind::Binary(BinaryOp::Subtract),
                "*" => OperationKind::Binary(BinaryOp::Multiply),
                "/" => OperationKind::Binary(BinaryOp::Divide),
                "=" => OperationKind::Enter,
                "%" => OperationKind::Percent,
                "neg" => OperationKind::Negate,
                "sqrt" => OperationKind::Extra(ExtraOp::Sqrt),
                "sqr" => OperationKind::Extra(ExtraOp::Square),
                "1/x" => OperationKind::Extra(ExtraOp::Reciprocal),
                "CE" => OperationKind::ClearEntered,
                "C" => OperationKind::Clear,
                "<-" => OperationKind::Backspace,
                number => {
                    keys.extend(number.chars().map(|c| match c {
                        ',' => Key::DecimalPoint,
                        d => Key::Digit(d.to_digit(10).unwrap() as u8),
                    }));
                    continue;
                },
            };
            keys.push(Key::Action(action));
        }
        keys
    }

    fn check_scenarios(table: &[Scenario]) {
        for (script, display, history) in table {
            let mut calc: Calculator =
                Calculator::from_config(EngineConfig::classic(), Arc::new(NoOpEventHandler)).unwrap();
            let screen = calc.press_all(session_keys(script));
            assert_eq!(screen.display, *display, "display after `{script}`");
            assert_eq!(screen.history, *history, "history after `{script}`");
        }
    }

    #[test]
    fn test_binary_scenarios() {
        check_scenarios(BINARY_SCENARIOS);
    }

    #[test]
    fn test_extra_scenarios() {
        check_scenarios(EXTRA_SCENARIOS);
    }

    #[test]
    fn test_percent_scenarios() {
        check_scenarios(PERCENT_SCENARIOS);
    }
}
