use super::tree::{Aced, Best, Die, Eval, RollResult, Sum};

pub(crate) const INTERNAL_ERROR: &str = "{ (internal error) no die results }";

/// Renders a result as text.
///
/// `wrapped` is set by a parent that joins several children with `" + "`,
/// asking the child to bracket itself if it is a chain of aces. Top-level
/// callers pass `false`.
#[enum_dispatch::enum_dispatch]
pub trait Detailed {
    fn detailed(&self, wrapped: bool) -> String;
}

impl Detailed for Die {
    fn detailed(&self, _wrapped: bool) -> String {
        self.0.to_string()
    }
}

impl Detailed for Aced {
    fn detailed(&self, wrapped: bool) -> String {
        match self.rolls.as_slice() {
            [] => {
                log::error!("cannot render an aced die with no rolls");
                INTERNAL_ERROR.to_owned()
            }
            [single] => single.detailed(wrapped),
            rolls => {
                let joined = join(rolls, true, " + ");
                if wrapped {
                    format!("[{}]", joined)
                } else {
                    joined
                }
            }
        }
    }
}

impl Detailed for Sum {
    fn detailed(&self, wrapped: bool) -> String {
        match self.results.as_slice() {
            [] => {
                log::error!("cannot render a sum with no addends");
                INTERNAL_ERROR.to_owned()
            }
            [single] => single.detailed(wrapped),
            results => join(results, true, " + "),
        }
    }
}

impl Detailed for Best {
    fn detailed(&self, wrapped: bool) -> String {
        match self.results.as_slice() {
            [] => {
                log::error!("cannot render a best-of with no dice");
                INTERNAL_ERROR.to_owned()
            }
            [single] => single.detailed(wrapped),
            results => format!("[{}] {}", join(results, false, ", "), self.value()),
        }
    }
}

fn join<D: Detailed>(items: &[D], wrapped: bool, sep: &str) -> String {
    items
        .iter()
        .map(|item| item.detailed(wrapped))
        .collect::<Vec<_>>()
        .join(sep)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Int;

    fn aced(rolls: &[Int]) -> RollResult {
        Aced::new(rolls.iter().copied().map(Die).collect()).into()
    }

    fn best(results: Vec<RollResult>) -> RollResult {
        Best::new(results).into()
    }

    fn sum(results: Vec<RollResult>) -> RollResult {
        Sum::new(results).into()
    }

    #[test]
    fn test_die() {
        assert_eq!(Die(4).detailed(false), "4");
        assert_eq!(Die(4).detailed(true), "4");
        assert_eq!(Die(-7).to_string(), "-7");
    }

    #[test]
    fn test_aced_single_is_bare() {
        assert_eq!(aced(&[3]).detailed(false), "3");
        assert_eq!(aced(&[3]).detailed(true), "3");
    }

    #[test]
    fn test_aced_chain() {
        assert_eq!(aced(&[8, 8, 2]).detailed(false), "8 + 8 + 2");
        assert_eq!(aced(&[8, 8, 2]).detailed(true), "[8 + 8 + 2]");
    }

    #[test]
    fn test_sum_single_passes_wrapped() {
        assert_eq!(sum(vec![aced(&[6, 1])]).detailed(false), "6 + 1");
        assert_eq!(sum(vec![aced(&[6, 1])]).detailed(true), "[6 + 1]");
    }

    #[test]
    fn test_sum_wraps_children() {
        let s = sum(vec![aced(&[2]), aced(&[10, 7]), Die(3).into()]);
        assert_eq!(s.detailed(false), "2 + [10 + 7] + 3");
        assert_eq!(s.detailed(true), "2 + [10 + 7] + 3");
    }

    #[test]
    fn test_best_single_passes_wrapped() {
        assert_eq!(best(vec![aced(&[4, 2])]).detailed(false), "4 + 2");
        assert_eq!(best(vec![aced(&[4, 2])]).detailed(true), "[4 + 2]");
    }

    #[test]
    fn test_best_lists_candidates() {
        let b = best(vec![aced(&[6, 2]), aced(&[3])]);
        assert_eq!(b.detailed(false), "[6 + 2, 3] 8");
        assert_eq!(b.detailed(true), "[6 + 2, 3] 8");
    }

    #[test]
    fn test_best_inside_sum() {
        let s = sum(vec![best(vec![aced(&[1]), aced(&[4, 3])]), Die(2).into()]);
        assert_eq!(s.to_string(), "[1, 4 + 3] 7 + 2");
    }

    #[test]
    fn test_internal_error_placeholder() {
        assert_eq!(sum(vec![]).to_string(), INTERNAL_ERROR);
        assert_eq!(best(vec![]).to_string(), INTERNAL_ERROR);
        assert_eq!(Aced::new(vec![]).to_string(), INTERNAL_ERROR);
        assert_eq!(
            sum(vec![best(vec![]), Die(1).into()]).to_string(),
            format!("{} + 1", INTERNAL_ERROR)
        );
    }
}
