/// Bounded object pool for render slots, the grid's recycling cache.
///
/// Per render pass: `recycle` rewinds the cursor, `obtain` hands out cached
/// slots (creating new ones past the end), `shrink` drops whatever this
/// pass did not touch.
pub struct Pool<T> {
    used: usize,
    cache: Vec<T>,
    create: Box<dyn FnMut() -> T + Send>,
    terminate: Option<Box<dyn FnMut(&mut T) + Send>>,
}

impl<T> Pool<T> {
    pub fn new(create: impl FnMut() -> T + Send + 'static) -> Self {
        Self {
            used: 0,
            cache: Vec::new(),
            create: Box::new(create),
            terminate: None,
        }
    }

    /// Hook run on each slot `shrink` drops, for cleanup the slot type
    /// cannot do in `Drop` (clearing callbacks, returning resources).
    pub fn set_terminator(&mut self, terminate: impl FnMut(&mut T) + Send + 'static) {
        self.terminate = Some(Box::new(terminate));
    }

    /// Next slot, reused from cache when available.
    pub fn obtain(&mut self) -> &mut T {
        if self.used == self.cache.len() {
            let slot = (self.create)();
            self.cache.push(slot);
        }
        let slot = &mut self.cache[self.used];
        self.used += 1;
        slot
    }

    /// Mark every slot unused without dropping any.
    pub fn recycle(&mut self) {
        self.used = 0;
    }

    /// Drop the slots past the in-use cursor, running the terminator on
    /// each.
    pub fn shrink(&mut self) {
        while self.cache.len() > self.used {
            if let Some(mut slot) = self.cache.pop() {
                if let Some(terminate) = self.terminate.as_mut() {
                    terminate(&mut slot);
                }
            }
        }
    }

    /// Slots handed out since the last `recycle`, in `obtain` order.
    pub fn in_use(&self) -> &[T] {
        &self.cache[..self.used]
    }

    pub fn cached(&self) -> usize {
        self.cache.len()
    }
}
