use crate::error::Error;
use crate::list::List;

/// A start/stop/step selection over a [`List`], in signed list-index terms.
///
/// All three bounds are optional. Leaving one out is *not* the same as
/// supplying its default explicitly: an absent `step` selects every
/// element, while an explicit `step(1)` is rejected by [`List::slice`].
///
/// `start` and `stop` accept negative values, translated the way single
/// indices are.
///
/// # Examples
///
/// ```
/// use arena_list::{List, Slice};
///
/// let list = List::from_iter([0, 1, 2, 3, 4]);
///
/// assert_eq!(list.slice(Slice::new())?, vec![0, 1, 2, 3, 4]);
/// assert_eq!(list.slice(Slice::new().start(1).stop(4))?, vec![1, 2, 3]);
/// assert_eq!(list.slice(Slice::new().step(2))?, vec![0, 2, 4]);
/// # Ok::<(), arena_list::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Slice {
    start: Option<isize>,
    stop: Option<isize>,
    step: Option<isize>,
}

impl Slice {
    /// A selection with nothing supplied: the whole list, every element.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Select from position `start` (inclusive), negative values counting
    /// from the back.
    #[inline]
    pub fn start(mut self, start: isize) -> Self {
        self.start = Some(start);
        self
    }

    /// Select up to position `stop` (exclusive), negative values counting
    /// from the back.
    #[inline]
    pub fn stop(mut self, stop: isize) -> Self {
        self.stop = Some(stop);
        self
    }

    /// Keep every `step`-th element of the selection, counted from `start`.
    ///
    /// A supplied step must be greater than 1; [`List::slice`] reports
    /// anything else as [`Error::InvalidStep`]. Leave the step out for the
    /// every-element behavior.
    #[inline]
    pub fn step(mut self, step: isize) -> Self {
        self.step = Some(step);
        self
    }
}

impl<T: Clone> List<T> {
    /// Copies the elements selected by `slice` into a `Vec`, in list order.
    ///
    /// An absent start means the front of the list, an absent stop means
    /// its length, an absent step means every element. Supplied start and
    /// stop values are translated like single indices (negative values
    /// count from the back) and are not clamped afterwards; positions that
    /// fall outside the list simply match nothing. The chain is walked
    /// exactly once.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidStep`] if a step was supplied and is not
    /// greater than 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_list::{Error, List, Slice};
    ///
    /// let list = List::from_iter([1, 2, 3, 4]);
    ///
    /// // Defaults select everything.
    /// assert_eq!(list.slice(Slice::new())?, vec![1, 2, 3, 4]);
    ///
    /// // Negative bounds count from the back.
    /// assert_eq!(list.slice(Slice::new().start(-3).stop(-1))?, vec![2, 3]);
    ///
    /// // Leaving the step out selects every element, but supplying 1
    /// // explicitly is rejected.
    /// assert_eq!(list.slice(Slice::new().step(1)), Err(Error::InvalidStep(1)));
    /// # Ok::<(), arena_list::Error>(())
    /// ```
    pub fn slice(&self, slice: Slice) -> Result<Vec<T>, Error> {
        let start = match slice.start {
            Some(start) => self.normalize(start),
            None => 0,
        };
        let stop = match slice.stop {
            Some(stop) => self.normalize(stop),
            None => self.len() as isize,
        };
        let step = match slice.step {
            Some(step) if step > 1 => step,
            Some(step) => return Err(Error::InvalidStep(step)),
            None => 1,
        };

        let mut items = Vec::new();
        for (position, element) in self.iter().enumerate() {
            let position = position as isize;
            if position >= start && position < stop && (position - start) % step == 0 {
                items.push(element.clone());
            }
        }
        Ok(items)
    }
}
