use std::num::NonZeroUsize;
use std::rc::Rc;

use log::warn;
use yew::Reducible;

use crate::config::CAROUSEL_INTERVAL_MS;
use crate::timers::Scheduler;

/// Which testimonial is featured. The index always stays in `[0, len)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: NonZeroUsize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselAction {
    Tick,
    Next,
    Previous,
    Select(usize),
}

impl Carousel {
    pub fn new(len: NonZeroUsize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len.get()
    }

    pub fn tick(&mut self) {
        self.next();
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.len();
    }

    pub fn previous(&mut self) {
        self.index = (self.index + self.len() - 1) % self.len();
    }

    /// Out-of-range indexes leave the carousel where it is.
    pub fn select(&mut self, index: usize) {
        if index < self.len() {
            self.index = index;
        } else {
            warn!("Ignoring testimonial {} of {}", index, self.len());
        }
    }
}

impl Reducible for Carousel {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        match action {
            CarouselAction::Tick => next.tick(),
            CarouselAction::Next => next.next(),
            CarouselAction::Previous => next.previous(),
            CarouselAction::Select(index) => next.select(index),
        }
        next.into()
    }
}

/// Starts ticking every `CAROUSEL_INTERVAL_MS`. Manual navigation does not
/// restart this cadence. Dropping the handle stops it.
pub fn start_autoplay<S, D>(scheduler: &S, dispatch: D) -> S::Handle
where
    S: Scheduler,
    D: Fn(CarouselAction) + 'static,
{
    scheduler.repeat(
        CAROUSEL_INTERVAL_MS,
        Box::new(move || dispatch(CarouselAction::Tick)),
    )
}
