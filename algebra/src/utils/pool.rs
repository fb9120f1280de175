use std::sync::{Arc, Mutex};

/// A thread-safe pool of reusable objects.
///
/// Clones share the same storage. Use a fresh pool, not a clone, to get
/// independent storage.
///
/// # Type Parameters
///
/// * `T` - The type of objects stored in the pool.
pub struct Pool<T>(Arc<Mutex<Vec<T>>>);

impl<T> Default for Pool<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Pool<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T> std::fmt::Debug for Pool<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pool").field("len", &self.len()).finish()
    }
}

impl<T> Pool<T> {
    /// Creates a new, empty `Pool`.
    #[inline]
    pub fn new() -> Self {
        Self(Arc::new(Mutex::new(Vec::new())))
    }

    /// Creates a new `Pool` holding `count` objects built by `f`.
    #[inline]
    pub fn new_with<F: FnMut() -> T>(count: usize, f: F) -> Self {
        let mut data = Vec::with_capacity(count);
        data.resize_with(count, f);
        Self(Arc::new(Mutex::new(data)))
    }

    /// Gets an object from the pool, if available.
    ///
    /// # Returns
    ///
    /// An `Option` containing an object from the pool, or `None` if the pool is empty.
    #[inline]
    pub fn get(&self) -> Option<T> {
        let mut data = self.0.lock().unwrap();
        data.pop()
    }

    /// Stores an object in the pool.
    ///
    /// # Arguments
    ///
    /// * `value` - The object to be stored in the pool.
    #[inline]
    pub fn store(&self, value: T) {
        let mut data = self.0.lock().unwrap();
        data.push(value);
    }

    /// Returns the number of objects currently in the pool.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.lock().unwrap().len()
    }

    /// Returns `true` if the pool holds no object.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears all objects from the pool.
    #[inline]
    pub fn clear(&self) {
        let mut data = self.0.lock().unwrap();
        data.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::Pool;

    #[test]
    fn test_pool() {
        let pool = Pool::new_with(2, || vec![0u8; 4]);
        assert_eq!(pool.len(), 2);

        let a = pool.get().unwrap();
        let b = pool.get().unwrap();
        assert!(pool.get().is_none());

        let shared = pool.clone();
        shared.store(a);
        assert_eq!(pool.len(), 1);

        let independent = Pool::<Vec<u8>>::new();
        independent.store(b);
        assert_eq!(pool.len(), 1);
        assert_eq!(independent.len(), 1);

        pool.clear();
        assert!(shared.is_empty());
    }
}
