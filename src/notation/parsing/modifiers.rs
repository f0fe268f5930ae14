//! Shared value parsers: rep schemes, weight specs, and the trailing
//! modifier list every notation strategy accepts after the exercise name.

use crate::notation::ast::{ExerciseSet, Reps, Tempo, Weight, WeightUnit};
use crate::notation::parsing::cursor::Cursor;
use crate::notation::token::TokenKind;

/// Modifier repetitions are bounded so a pathological token stream cannot
/// spin this loop.
const MAX_MODIFIERS: usize = 16;

/// An `@` number with no unit and no percent sign at or below this value is
/// read as an RPE, not a load.
const RPE_CEILING: f64 = 10.0;

/// Modifiers shared by every strategy; each one applies to every set the
/// enclosing strategy produces.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Modifiers {
    pub weight: Option<Weight>,
    pub rpe: Option<u8>,
    pub tempo: Option<Tempo>,
    pub rest_secs: Option<u32>,
    pub dropset: bool,
}

impl Modifiers {
    pub fn apply(&self, set: &mut ExerciseSet) {
        if set.weight.is_none() {
            set.weight = self.weight.clone();
        }
        if self.rpe.is_some() {
            set.rpe = self.rpe;
        }
        if self.tempo.is_some() {
            set.tempo = self.tempo;
        }
        if self.rest_secs.is_some() {
            set.rest_secs = self.rest_secs;
        }
    }
}

/// Parse a rep scheme: `AMRAP`, `N`, or `N-M`. Non-integral numbers do not
/// count as reps.
pub fn parse_reps(cur: &mut Cursor) -> Option<Reps> {
    if cur.eat(TokenKind::Amrap).is_some() {
        return Some(Reps::Amrap);
    }
    let min = parse_count(cur)?;
    if cur.at(TokenKind::Dash) {
        let range_mark = cur.mark();
        cur.advance();
        if let Some(max) = parse_count(cur) {
            return Some(Reps::range(min, max));
        }
        // Dash not followed by a count belongs to whoever comes next.
        cur.reset(range_mark);
    }
    Some(Reps::fixed(min))
}

/// Parse a non-negative integer count from a Number token.
pub fn parse_count(cur: &mut Cursor) -> Option<u32> {
    let mark = cur.mark();
    let value = cur.eat_number()?;
    if value.fract() != 0.0 || value < 0.0 || value > u32::MAX as f64 {
        cur.reset(mark);
        return None;
    }
    Some(value as u32)
}

/// Parse a weight spec at the cursor: `BW`, `N%`, `N[-M]` with an optional
/// unit. Returns `None` without consuming when nothing weight-like is here.
pub fn parse_weight(cur: &mut Cursor) -> Option<Weight> {
    if cur.eat(TokenKind::Bodyweight).is_some() {
        return Some(Weight::bodyweight());
    }

    let value = cur.eat_number()?;

    if cur.eat(TokenKind::Percent).is_some() {
        return Some(Weight::percent(value));
    }

    let mut max = None;
    if cur.at(TokenKind::Dash) {
        let range_mark = cur.mark();
        cur.advance();
        match cur.eat_number() {
            Some(high) => max = Some(high),
            None => cur.reset(range_mark),
        }
    }

    let unit = eat_weight_unit(cur);
    Some(Weight {
        value,
        max,
        unit,
        bodyweight: false,
        percentage: false,
        per_side: false,
    })
}

/// Consume a WeightUnit token, mapping its spelling to lbs/kg.
pub fn eat_weight_unit(cur: &mut Cursor) -> Option<WeightUnit> {
    if !cur.at(TokenKind::WeightUnit) {
        return None;
    }
    let text = cur.advance()?.text.to_lowercase();
    match text.as_str() {
        "kg" | "kgs" | "kilos" => Some(WeightUnit::Kg),
        _ => Some(WeightUnit::Lbs),
    }
}

/// Parse the trailing modifier list: `@weight-or-rpe`, `rest N [unit]`,
/// `tempo E-P-C[-P2]`, `rpe N`, and the `drop` marker, in any order, each
/// repeatable up to the safety bound.
pub fn parse_modifiers(cur: &mut Cursor) -> Modifiers {
    let mut mods = Modifiers::default();
    for _ in 0..MAX_MODIFIERS {
        let mark = cur.mark();
        match cur.kind() {
            TokenKind::At => {
                cur.advance();
                if !parse_at_argument(cur, &mut mods) {
                    cur.reset(mark);
                    break;
                }
            }
            TokenKind::Rest => {
                cur.advance();
                match parse_rest_value(cur) {
                    Some(secs) => mods.rest_secs = Some(secs),
                    None => {
                        cur.reset(mark);
                        break;
                    }
                }
            }
            TokenKind::Tempo => {
                cur.advance();
                match parse_tempo_value(cur) {
                    Some(tempo) => mods.tempo = Some(tempo),
                    None => {
                        cur.reset(mark);
                        break;
                    }
                }
            }
            TokenKind::Rpe => {
                cur.advance();
                match parse_rpe_value(cur) {
                    Some(rpe) => mods.rpe = Some(rpe),
                    None => {
                        cur.reset(mark);
                        break;
                    }
                }
            }
            TokenKind::Drop => {
                cur.advance();
                mods.dropset = true;
            }
            _ => break,
        }
    }
    mods
}

/// What follows an `@`: an RPE keyword, a weight spec, or a bare number
/// that is an RPE when it is unitless, not a percent, and at most 10.
fn parse_at_argument(cur: &mut Cursor, mods: &mut Modifiers) -> bool {
    if cur.eat(TokenKind::Rpe).is_some() {
        match parse_rpe_value(cur) {
            Some(rpe) => {
                mods.rpe = Some(rpe);
                return true;
            }
            None => return false,
        }
    }

    let mark = cur.mark();
    if let Some(weight) = parse_weight(cur) {
        let bare_small = !weight.bodyweight
            && !weight.percentage
            && weight.unit.is_none()
            && weight.max.is_none()
            && weight.value <= RPE_CEILING;
        if bare_small && weight.value >= 1.0 {
            // "@8" is an effort rating, not an 8 lb load.
            cur.reset(mark);
            if let Some(rpe) = parse_rpe_value(cur) {
                mods.rpe = Some(rpe);
                return true;
            }
            return false;
        }
        mods.weight = Some(weight);
        return true;
    }
    false
}

/// Fractional ratings truncate: `@8.5` reads as RPE 8, never 9.
fn parse_rpe_value(cur: &mut Cursor) -> Option<u8> {
    let mark = cur.mark();
    let value = cur.eat_number()?;
    if !(1.0..=RPE_CEILING).contains(&value) {
        cur.reset(mark);
        return None;
    }
    Some(value as u8)
}

/// Rest duration: a number with an optional time unit; minutes convert to
/// seconds, everything else is read as seconds.
fn parse_rest_value(cur: &mut Cursor) -> Option<u32> {
    let value = parse_count(cur)?;
    let secs = if cur.at(TokenKind::TimeUnit) {
        let unit = cur.advance()?.text.to_lowercase();
        match unit.as_str() {
            "min" | "mins" | "minutes" | "m" => value.saturating_mul(60),
            _ => value,
        }
    } else {
        value
    };
    Some(secs)
}

/// Tempo: `E-P-C` with an optional fourth `-P2` component.
fn parse_tempo_value(cur: &mut Cursor) -> Option<Tempo> {
    let eccentric = parse_count(cur)?;
    cur.eat(TokenKind::Dash)?;
    let pause = parse_count(cur)?;
    cur.eat(TokenKind::Dash)?;
    let concentric = parse_count(cur)?;

    let mut pause_top = None;
    if cur.at(TokenKind::Dash) {
        let mark = cur.mark();
        cur.advance();
        match parse_count(cur) {
            Some(p) => pause_top = Some(p),
            None => cur.reset(mark),
        }
    }
    Some(Tempo {
        eccentric,
        pause,
        concentric,
        pause_top,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notation::lexing::tokenize;

    fn cursor_over(source: &str) -> Vec<crate::notation::token::Token> {
        tokenize(source)
    }

    #[test]
    fn test_reps_forms() {
        let tokens = cursor_over("8-12");
        let mut cur = Cursor::new(&tokens);
        assert_eq!(parse_reps(&mut cur), Some(Reps::range(8, 12)));

        let tokens = cursor_over("amrap");
        let mut cur = Cursor::new(&tokens);
        assert_eq!(parse_reps(&mut cur), Some(Reps::Amrap));
    }

    #[test]
    fn test_reps_dash_backout() {
        // "5-" with nothing after the dash: the dash is left unconsumed.
        let tokens = cursor_over("5- squat");
        let mut cur = Cursor::new(&tokens);
        assert_eq!(parse_reps(&mut cur), Some(Reps::fixed(5)));
        assert!(cur.at(TokenKind::Dash));
    }

    #[test]
    fn test_weight_forms() {
        let tokens = cursor_over("225lbs");
        let mut cur = Cursor::new(&tokens);
        let w = parse_weight(&mut cur).unwrap();
        assert_eq!(w.value, 225.0);
        assert_eq!(w.unit, Some(WeightUnit::Lbs));

        let tokens = cursor_over("80%");
        let mut cur = Cursor::new(&tokens);
        assert!(parse_weight(&mut cur).unwrap().percentage);

        let tokens = cursor_over("25-35kg");
        let mut cur = Cursor::new(&tokens);
        let w = parse_weight(&mut cur).unwrap();
        assert_eq!(w.max, Some(35.0));
        assert_eq!(w.unit, Some(WeightUnit::Kg));

        let tokens = cursor_over("bw");
        let mut cur = Cursor::new(&tokens);
        assert!(parse_weight(&mut cur).unwrap().bodyweight);
    }

    #[test]
    fn test_at_number_disambiguation() {
        // "@8" is an RPE; "@225" is a load.
        let tokens = cursor_over("@8");
        let mut cur = Cursor::new(&tokens);
        let mods = parse_modifiers(&mut cur);
        assert_eq!(mods.rpe, Some(8));
        assert!(mods.weight.is_none());

        let tokens = cursor_over("@225");
        let mut cur = Cursor::new(&tokens);
        let mods = parse_modifiers(&mut cur);
        assert_eq!(mods.weight.as_ref().unwrap().value, 225.0);
        assert!(mods.rpe.is_none());

        // A unit forces the load reading even for small values.
        let tokens = cursor_over("@8kg");
        let mut cur = Cursor::new(&tokens);
        let mods = parse_modifiers(&mut cur);
        assert_eq!(mods.weight.as_ref().unwrap().value, 8.0);
    }

    #[test]
    fn test_fractional_rpe_truncates() {
        // Half ratings are common; they floor to the whole step below.
        let tokens = cursor_over("@8.5");
        let mut cur = Cursor::new(&tokens);
        assert_eq!(parse_modifiers(&mut cur).rpe, Some(8));

        let tokens = cursor_over("rpe 9.5");
        let mut cur = Cursor::new(&tokens);
        assert_eq!(parse_modifiers(&mut cur).rpe, Some(9));

        // Below the floor of the scale is still rejected.
        let tokens = cursor_over("rpe 0.5");
        let mut cur = Cursor::new(&tokens);
        assert_eq!(parse_modifiers(&mut cur).rpe, None);
    }

    #[test]
    fn test_rest_units() {
        let tokens = cursor_over("r 90s");
        let mut cur = Cursor::new(&tokens);
        assert_eq!(parse_modifiers(&mut cur).rest_secs, Some(90));

        let tokens = cursor_over("rest 2 min");
        let mut cur = Cursor::new(&tokens);
        assert_eq!(parse_modifiers(&mut cur).rest_secs, Some(120));
    }

    #[test]
    fn test_tempo_three_and_four_part() {
        let tokens = cursor_over("tempo 3-1-1");
        let mut cur = Cursor::new(&tokens);
        let t = parse_modifiers(&mut cur).tempo.unwrap();
        assert_eq!((t.eccentric, t.pause, t.concentric, t.pause_top), (3, 1, 1, None));

        let tokens = cursor_over("tempo 4-2-1-1");
        let mut cur = Cursor::new(&tokens);
        let t = parse_modifiers(&mut cur).tempo.unwrap();
        assert_eq!(t.pause_top, Some(1));
    }

    #[test]
    fn test_modifiers_in_any_order() {
        let tokens = cursor_over("rpe 9 @185lbs r 60s tempo 2-0-2");
        let mut cur = Cursor::new(&tokens);
        let mods = parse_modifiers(&mut cur);
        assert_eq!(mods.rpe, Some(9));
        assert_eq!(mods.weight.as_ref().unwrap().value, 185.0);
        assert_eq!(mods.rest_secs, Some(60));
        assert!(mods.tempo.is_some());
    }

    #[test]
    fn test_failed_modifier_backs_out() {
        // "r" followed by no number is left for the name layer to judge.
        let tokens = cursor_over("r squat");
        let mut cur = Cursor::new(&tokens);
        let mods = parse_modifiers(&mut cur);
        assert!(mods.rest_secs.is_none());
        assert!(cur.at(TokenKind::Rest));
    }
}
