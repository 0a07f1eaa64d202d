//! This module contains the [`Secret`] type, a wrapper for sensitive data
//! that generic inspection machinery cannot see through
//!
//! `Secret` values are immutable, cheap to clone, and comparable without
//! exposing their content. The content itself can only be recovered through
//! the explicit reveal methods.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::sync::Arc;

use crate::hashing;
use sealed::Sealed;

mod sealed {
    /// Byte-level access to obscurable content. This lives in a private
    /// module so the payload can never be reached through the trait from
    /// outside the crate.
    pub trait Sealed {
        fn into_payload(self) -> Vec<u8>;
        fn from_payload(payload: &[u8]) -> Self;
    }

    impl Sealed for Vec<u8> {
        fn into_payload(self) -> Vec<u8> {
            self
        }

        fn from_payload(payload: &[u8]) -> Self {
            payload.to_vec()
        }
    }

    impl Sealed for String {
        fn into_payload(self) -> Vec<u8> {
            self.into_bytes()
        }

        fn from_payload(payload: &[u8]) -> Self {
            // Payloads for `Secret<String>` always originate from a valid
            // `String`, so the lossy conversion never replaces anything.
            String::from_utf8_lossy(payload).into_owned()
        }
    }
}

/// The set of content types that can be obscured by a [`Secret`]
///
/// This trait is sealed; it is implemented for `String` and `Vec<u8>` and
/// cannot be implemented outside of this crate.
pub trait Obscurable: Sealed {}

impl Obscurable for Vec<u8> {}
impl Obscurable for String {}

/// A [`Secret`] holding string content
pub type SecretString = Secret<String>;

/// A [`Secret`] holding byte content
pub type SecretBytes = Secret<Vec<u8>>;

/// Secret data that cannot be recovered through generic inspection, which is
/// useful for preventing data such as passwords and API keys from accidental
/// serialization, logging, or transfer over the wire.
///
/// The wrapper has only private fields, its [`Debug`](fmt::Debug) output is
/// the literal `[REDACTED]`, and it deliberately implements neither `Display`
/// nor any serialization trait - a struct containing a `Secret` which derives
/// a serializer fails to compile rather than leaking. Code holding a value
/// can still reveal it explicitly, and the content lives in ordinary heap
/// memory, so this thwarts a well-intentioned developer, not malicious code
/// with access to the process.
///
/// The zero value of this type (from [`Secret::default`]) is intentionally
/// distinguishable from an obscured empty string or buffer, so that empty
/// secrets do not appear as a form of null when the surrounding data
/// structure is inspected. The reveal methods panic on the zero value; the
/// comparisons and [`Secret::is_valid`] do not. This is analogous to the
/// behavior of a null reference.
///
/// It is immutable, and cloning shares the underlying storage rather than
/// copying it, so it is safe and cheap to pass around, including across
/// threads.
///
/// It is comparable and hashable, so it can be used as a map key.
///
/// # Examples
///
/// ```rust
/// use camo::SecretBytes;
///
/// let secret = SecretBytes::obscure(vec![0, 2, 4]);
/// assert!(secret.is_valid());
/// assert_eq!(secret.reveal(), vec![0, 2, 4]);
///
/// let zero = SecretBytes::default();
/// assert!(!zero.is_valid());
/// assert_ne!(zero, SecretBytes::obscure(Vec::new()));
/// ```
pub struct Secret<T: Obscurable> {
    // `None` only for the zero value. An obscured empty payload still owns a
    // distinct allocation, so zero and empty never share a representation.
    payload: Option<Arc<[u8]>>,
    hash: u64,
    marker: PhantomData<T>,
}

impl<T: Obscurable> Secret<T> {
    /// Returns a `Secret` wrapping the given content.
    ///
    /// The content is copied into newly allocated storage owned by the
    /// secret, so later changes to the caller's data are never observable
    /// through it. Every call allocates fresh storage, even for identical
    /// content - secrets are never interned or deduplicated.
    ///
    /// The returned value is always valid, including for empty content.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use camo::SecretString;
    ///
    /// let secret = SecretString::obscure("correct horse battery staple");
    /// assert!(secret.is_valid());
    /// ```
    #[must_use]
    pub fn obscure(content: impl Into<T>) -> Self {
        let payload: Arc<[u8]> = content.into().into_payload().into();
        let hash = hashing::content_hash(&payload);
        Self {
            payload: Some(payload),
            hash,
            marker: PhantomData,
        }
    }

    /// Reports whether the secret is valid, i.e. was produced by
    /// [`Secret::obscure`] rather than being the zero value.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.payload.is_some()
    }

    /// Returns a copy of the underlying content.
    ///
    /// Every call reconstructs the content into fresh storage; mutating a
    /// revealed value never affects the secret or later reveals.
    ///
    /// # Panics
    ///
    /// Panics if the secret is the zero value.
    #[must_use]
    pub fn reveal(&self) -> T {
        match &self.payload {
            Some(payload) => T::from_payload(payload),
            None => panic!("illegal use of reveal on a zero secret"),
        }
    }

    /// Copies as much of the content as fits into `dst`, starting at the
    /// beginning of both, and returns the number of bytes written. Bytes of
    /// `dst` past that count are left untouched. Does not allocate.
    ///
    /// # Panics
    ///
    /// Panics if the secret is the zero value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use camo::SecretBytes;
    ///
    /// let secret = SecretBytes::obscure(vec![0, 1, 2, 3, 4]);
    /// let mut buf = [0xFF; 7];
    /// assert_eq!(secret.reveal_into(&mut buf), 5);
    /// assert_eq!(buf, [0, 1, 2, 3, 4, 0xFF, 0xFF]);
    /// ```
    pub fn reveal_into(&self, dst: &mut [u8]) -> usize {
        match &self.payload {
            Some(payload) => {
                let count = payload.len().min(dst.len());
                dst[..count].copy_from_slice(&payload[..count]);
                count
            }
            None => panic!("illegal use of reveal_into on a zero secret"),
        }
    }

    /// Appends the content to `dst` and returns the updated buffer, reusing
    /// its capacity where possible.
    ///
    /// # Panics
    ///
    /// Panics if the secret is the zero value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use camo::SecretString;
    ///
    /// let secret = SecretString::obscure("bar");
    /// assert_eq!(secret.append_to(b"foo".to_vec()), b"foobar");
    /// ```
    #[must_use]
    pub fn append_to(&self, mut dst: Vec<u8>) -> Vec<u8> {
        match &self.payload {
            Some(payload) => {
                dst.extend_from_slice(payload);
                dst
            }
            None => panic!("illegal use of append_to on a zero secret"),
        }
    }
}

/// The zero value: no content, not valid, equal only to other zero values.
impl<T: Obscurable> Default for Secret<T> {
    fn default() -> Self {
        Self {
            payload: None,
            hash: 0,
            marker: PhantomData,
        }
    }
}

/// Cloning shares the underlying storage; it never copies the content.
impl<T: Obscurable> Clone for Secret<T> {
    fn clone(&self) -> Self {
        Self {
            payload: self.payload.clone(),
            hash: self.hash,
            marker: PhantomData,
        }
    }
}

impl<T: Obscurable> PartialEq for Secret<T> {
    fn eq(&self, other: &Self) -> bool {
        match (&self.payload, &other.payload) {
            // Shared storage (a value and its clone) is equal without
            // touching the content. The hash check then rules most unequal
            // pairs out: the key is fixed per process, so a differing hash
            // can only mean differing content.
            (Some(a), Some(b)) => {
                Arc::ptr_eq(a, b) || (self.hash == other.hash && a == b)
            }
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T: Obscurable> Eq for Secret<T> {}

impl<T: Obscurable> PartialOrd for Secret<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Lexicographic byte order over the content, with the zero value sorting
/// strictly before every valid secret (including a valid empty one).
impl<T: Obscurable> Ord for Secret<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (&self.payload, &other.payload) {
            (Some(a), Some(b)) => {
                if Arc::ptr_eq(a, b) {
                    Ordering::Equal
                } else {
                    a.as_ref().cmp(b.as_ref())
                }
            }
            (Some(_), None) => Ordering::Greater,
            (None, Some(_)) => Ordering::Less,
            (None, None) => Ordering::Equal,
        }
    }
}

/// Feeds the hash computed at construction time, so hashing never has to walk
/// the content again. Consistent with `Eq`: equal secrets hash equally within
/// one process run.
impl<T: Obscurable> Hash for Secret<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match &self.payload {
            Some(_) => {
                state.write_u8(1);
                state.write_u64(self.hash);
            }
            // The discriminant alone; the zero value must not collide with a
            // valid empty secret.
            None => state.write_u8(0),
        }
    }
}

impl<T: Obscurable> fmt::Debug for Secret<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn identity(secret: &SecretBytes) -> usize {
        let payload = secret.payload.as_ref().expect("valid secret");
        Arc::as_ptr(payload) as *const u8 as usize
    }

    #[test]
    fn obscure_does_not_repeat_storage() {
        // For a given content, obscure should never hand out the same
        // backing storage twice as long as the secrets are alive.
        for content in [Vec::new(), vec![1, 2, 3]] {
            let secrets: Vec<SecretBytes> = (0..1000)
                .map(|_| SecretBytes::obscure(content.clone()))
                .collect();
            let identities: HashSet<usize> = secrets.iter().map(identity).collect();
            assert_eq!(identities.len(), secrets.len());
        }
    }

    #[test]
    fn clone_shares_storage() {
        let secret = SecretBytes::obscure(vec![1, 2, 3]);
        let copy = secret.clone();
        assert_eq!(identity(&secret), identity(&copy));
        assert_eq!(secret, copy);
    }

    #[test]
    fn content_hash_is_deterministic() {
        let first = SecretString::obscure("test");
        for _ in 0..100 {
            let next = SecretString::obscure("test");
            assert_eq!(first.hash, next.hash);
            assert_eq!(first, next);
        }
    }

    #[test]
    fn zero_and_empty_are_representationally_distinct() {
        let zero = SecretBytes::default();
        let empty = SecretBytes::obscure(Vec::new());
        assert!(zero.payload.is_none());
        assert!(empty.payload.is_some());
    }
}
