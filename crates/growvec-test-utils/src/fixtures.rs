//! Instrumented element types.

use std::cell::Cell;
use std::rc::Rc;

/// Shared construction/drop counters.
///
/// Every probe built against a tally bumps `created` when it comes into
/// existence (by construction or clone) and `dropped` when it goes away.
/// Leak-parity assertions compare the two after the scenario finishes.
#[derive(Debug, Default)]
pub struct Tally {
    created: Cell<usize>,
    dropped: Cell<usize>,
}

impl Tally {
    /// A fresh, shareable tally.
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn created(&self) -> usize {
        self.created.get()
    }

    pub fn dropped(&self) -> usize {
        self.dropped.get()
    }

    /// Probes currently alive.
    pub fn live(&self) -> usize {
        self.created.get() - self.dropped.get()
    }

    /// Whether every construction has been matched by a drop.
    pub fn is_balanced(&self) -> bool {
        self.created.get() == self.dropped.get()
    }

    fn record_created(&self) {
        self.created.set(self.created.get() + 1);
    }

    fn record_dropped(&self) {
        self.dropped.set(self.dropped.get() + 1);
    }
}

/// Element that reports its construction and destruction to a [`Tally`].
#[derive(Debug)]
pub struct Tracked {
    pub value: u64,
    tally: Rc<Tally>,
}

impl Tracked {
    pub fn new(value: u64, tally: &Rc<Tally>) -> Self {
        tally.record_created();
        Self {
            value,
            tally: Rc::clone(tally),
        }
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        Self::new(self.value, &self.tally)
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.tally.record_dropped();
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Tracked {}

/// Element whose `clone` panics once a shared fuse runs out.
///
/// The fuse counts the clones still allowed to succeed; the clone that
/// finds it at zero panics. Constructions and drops report to the tally
/// like [`Tracked`], so the panic path can be checked for leak parity.
#[derive(Debug)]
pub struct FlakyClone {
    pub value: u64,
    tally: Rc<Tally>,
    fuse: Rc<Cell<usize>>,
}

impl FlakyClone {
    /// A fuse allowing `clones` successful clones across every element
    /// sharing it.
    pub fn fuse(clones: usize) -> Rc<Cell<usize>> {
        Rc::new(Cell::new(clones))
    }

    pub fn new(value: u64, tally: &Rc<Tally>, fuse: &Rc<Cell<usize>>) -> Self {
        tally.record_created();
        Self {
            value,
            tally: Rc::clone(tally),
            fuse: Rc::clone(fuse),
        }
    }
}

impl Clone for FlakyClone {
    fn clone(&self) -> Self {
        let remaining = self.fuse.get();
        if remaining == 0 {
            panic!("scheduled clone failure");
        }
        self.fuse.set(remaining - 1);
        Self::new(self.value, &self.tally, &self.fuse)
    }
}

impl Drop for FlakyClone {
    fn drop(&mut self) {
        self.tally.record_dropped();
    }
}

thread_local! {
    static DEFAULT_FUSE: Cell<Option<usize>> = const { Cell::new(None) };
    static DEFAULT_CREATED: Cell<usize> = const { Cell::new(0) };
    static DEFAULT_DROPPED: Cell<usize> = const { Cell::new(0) };
}

/// Element whose `Default::default` panics on a scheduled call.
///
/// `Default` takes no receiver, so scheduling goes through thread-local
/// state: [`FlakyDefault::arm`] sets how many constructions may succeed
/// before the next one panics. Counters tally successful constructions and
/// drops for leak-parity checks. Call [`FlakyDefault::reset`] at the start
/// of each scenario.
#[derive(Debug)]
pub struct FlakyDefault;

impl FlakyDefault {
    /// Allow `successes` constructions; the one after panics.
    pub fn arm(successes: usize) {
        DEFAULT_FUSE.with(|fuse| fuse.set(Some(successes)));
    }

    /// Clear the fuse and both counters.
    pub fn reset() {
        DEFAULT_FUSE.with(|fuse| fuse.set(None));
        DEFAULT_CREATED.with(|c| c.set(0));
        DEFAULT_DROPPED.with(|c| c.set(0));
    }

    /// Successful constructions since the last reset.
    pub fn created() -> usize {
        DEFAULT_CREATED.with(Cell::get)
    }

    /// Drops since the last reset.
    pub fn dropped() -> usize {
        DEFAULT_DROPPED.with(Cell::get)
    }

    pub fn is_balanced() -> bool {
        Self::created() == Self::dropped()
    }
}

impl Default for FlakyDefault {
    fn default() -> Self {
        DEFAULT_FUSE.with(|fuse| {
            if let Some(remaining) = fuse.get() {
                if remaining == 0 {
                    panic!("scheduled default-construction failure");
                }
                fuse.set(Some(remaining - 1));
            }
        });
        DEFAULT_CREATED.with(|c| c.set(c.get() + 1));
        FlakyDefault
    }
}

impl Drop for FlakyDefault {
    fn drop(&mut self) {
        DEFAULT_DROPPED.with(|c| c.set(c.get() + 1));
    }
}

/// Non-clonable element.
///
/// Code that compiles and runs with this type proves the path under test
/// relocates by move and never clones.
#[derive(Debug, PartialEq, Eq)]
pub struct MoveOnly(pub u64);
