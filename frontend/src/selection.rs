use std::num::NonZeroUsize;
use std::rc::Rc;

use log::debug;
use thiserror::Error;
use yew::prelude::*;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("cannot highlight steps of an empty catalog")]
    EmptyCatalog,
    #[error("step {index} is outside the catalog of {len} steps")]
    OutOfRange { index: usize, len: usize },
}

/// Highlighted step of the flow. `active` is always in `[0, len)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Selection {
    active: usize,
    len: NonZeroUsize,
}

impl Selection {
    pub fn new(len: usize) -> Result<Self, SelectionError> {
        let len = NonZeroUsize::new(len).ok_or(SelectionError::EmptyCatalog)?;
        Ok(Self { active: 0, len })
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn len(&self) -> usize {
        self.len.get()
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == index
    }

    pub fn tick(&mut self) -> usize {
        self.active = (self.active + 1) % self.len.get();
        self.active
    }

    /// Jumps straight to `index`. The auto-advance schedule is not touched.
    pub fn select(&mut self, index: usize) -> Result<usize, SelectionError> {
        if index >= self.len.get() {
            return Err(SelectionError::OutOfRange {
                index,
                len: self.len.get(),
            });
        }
        self.active = index;
        Ok(index)
    }
}

pub enum SelectionAction {
    Advance,
    Select(usize),
}

impl Reducible for Selection {
    type Action = SelectionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        match action {
            SelectionAction::Advance => {
                let active = next.tick();
                debug!("auto-advance to step {} of {}", active + 1, next.len());
            }
            SelectionAction::Select(index) => match next.select(index) {
                Ok(active) => debug!("step {} selected", active),
                Err(e) => {
                    debug!("ignoring selection: {}", e);
                    return self;
                }
            },
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_catalog_has_no_selection() {
        assert_eq!(Selection::new(0), Err(SelectionError::EmptyCatalog));
    }

    #[test]
    fn starts_at_first_step() {
        let selection = Selection::new(4).unwrap();
        assert_eq!(selection.active(), 0);
        assert!(selection.is_active(0));
        assert!(!selection.is_active(1));
    }

    #[test]
    fn ticks_then_manual_selection() {
        let mut selection = Selection::new(10).unwrap();
        for _ in 0..3 {
            selection.tick();
        }
        assert_eq!(selection.active(), 3);
        assert_eq!(selection.select(7), Ok(7));
        assert_eq!(selection.active(), 7);
        assert_eq!(selection.tick(), 8);
    }

    #[test]
    fn out_of_range_selection_is_ignored() {
        let mut selection = Selection::new(8).unwrap();
        selection.tick();
        selection.tick();
        assert_eq!(
            selection.select(8),
            Err(SelectionError::OutOfRange { index: 8, len: 8 })
        );
        assert_eq!(selection.active(), 2);
    }

    #[test]
    fn wraps_around_last_step() {
        let mut selection = Selection::new(3).unwrap();
        selection.select(2).unwrap();
        assert_eq!(selection.tick(), 0);
    }

    #[test]
    fn reducer_keeps_state_for_rejected_selection() {
        let state = Rc::new(Selection::new(5).unwrap());
        let next = state.clone().reduce(SelectionAction::Select(9));
        assert!(Rc::ptr_eq(&state, &next));

        let next = next.reduce(SelectionAction::Select(4));
        assert_eq!(next.active(), 4);
        let next = next.reduce(SelectionAction::Advance);
        assert_eq!(next.active(), 0);
    }

    proptest! {
        #[test]
        fn k_ticks_land_on_k_mod_n(len in 1usize..64, ticks in 0usize..500) {
            let mut selection = Selection::new(len).unwrap();
            for _ in 0..ticks {
                selection.tick();
            }
            prop_assert_eq!(selection.active(), ticks % len);
        }

        #[test]
        fn select_then_tick_continues_from_selection(len in 1usize..64, pick in 0usize..128, ticks in 0usize..64) {
            let mut selection = Selection::new(len).unwrap();
            for _ in 0..ticks {
                selection.tick();
            }
            let before = selection.active();
            match selection.select(pick) {
                Ok(active) => {
                    prop_assert!(pick < len);
                    prop_assert_eq!(active, pick);
                    prop_assert_eq!(selection.tick(), (pick + 1) % len);
                }
                Err(_) => {
                    prop_assert!(pick >= len);
                    prop_assert_eq!(selection.active(), before);
                }
            }
        }
    }
}
