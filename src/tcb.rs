//! TCB signature and license-server URL lists.
//!
//! Customer licenses carry two variable-length lists: signatures over the
//! trusted computing base, and the URLs of the license servers allowed to
//! serve the license. Both are modeled as singly-linked chains of owned
//! nodes; teardown is an iterative drain so an adversarially long list
//! read from a license blob cannot blow the stack through recursive
//! destructor calls. Every node and its owned sub-buffer is released
//! exactly once.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One TCB signature entry from a license blob.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TcbSignature {
    /// TCB name the signature covers.
    pub name: String,
    /// Signature over the TCB, as produced by the license tooling.
    pub signature: String,
}

/// One license-server URL entry from a license blob.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerUrl {
    /// URL of a license server allowed to serve this license.
    pub url: String,
}

/// Chain of TCB signatures.
pub type TcbSigList = Chain<TcbSignature>;

/// Chain of license-server URLs.
pub type UrlList = Chain<ServerUrl>;

struct Node<T> {
    value: T,
    next: Option<Box<Node<T>>>,
}

/// Singly-linked chain of owned nodes with iterative teardown.
pub struct Chain<T> {
    head: Option<Box<Node<T>>>,
    len: usize,
}

impl<T> Chain<T> {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Number of nodes in the chain.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check whether the chain has no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Push a value at the head of the chain.
    pub fn push_front(&mut self, value: T) {
        let node = Box::new(Node {
            value,
            next: self.head.take(),
        });
        self.head = Some(node);
        self.len += 1;
    }

    /// Remove and return the head value, if any.
    pub fn pop_front(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            self.head = node.next;
            self.len -= 1;
            node.value
        })
    }

    /// Iterate over the chain's values from head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    /// Release every node and null the head.
    ///
    /// Each node's `next` link is detached before the node drops, so the
    /// drain stays iterative regardless of chain length.
    pub fn clear(&mut self) {
        let mut cur = self.head.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
        }
        self.len = 0;
    }
}

impl<T> Drop for Chain<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for Chain<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Chain<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let values: Vec<T> = iter.into_iter().collect();
        let mut chain = Self::new();
        for value in values.into_iter().rev() {
            chain.push_front(value);
        }
        chain
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Chain<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Serialize> Chain<T> {
    /// Serialize the chain as a JSON array, head first.
    pub fn to_json(&self) -> Result<String> {
        let values: Vec<&T> = self.iter().collect();
        Ok(serde_json::to_string(&values)?)
    }
}

impl<T: DeserializeOwned> Chain<T> {
    /// Parse a chain from a JSON array, preserving element order.
    pub fn from_json(json: &str) -> Result<Self> {
        let values: Vec<T> = serde_json::from_str(json)?;
        Ok(values.into_iter().collect())
    }
}

/// Iterator over chain values.
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.value
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sig(name: &str) -> TcbSignature {
        TcbSignature {
            name: name.to_string(),
            signature: format!("sig-over-{}", name),
        }
    }

    #[test]
    fn test_empty_chain() {
        let chain: TcbSigList = Chain::new();
        assert!(chain.is_empty());
        assert_eq!(chain.len(), 0);
        assert_eq!(chain.iter().count(), 0);
    }

    #[test]
    fn test_push_pop_front() {
        let mut chain = Chain::new();
        chain.push_front(sig("runtime"));
        chain.push_front(sig("kernel"));

        assert_eq!(chain.len(), 2);
        assert_eq!(chain.pop_front().unwrap().name, "kernel");
        assert_eq!(chain.pop_front().unwrap().name, "runtime");
        assert!(chain.pop_front().is_none());
        assert!(chain.is_empty());
    }

    #[test]
    fn test_iter_order() {
        let chain: UrlList = [
            ServerUrl { url: "https://lsa.example.com:4450".into() },
            ServerUrl { url: "https://lsb.example.com:4450".into() },
        ]
        .into_iter()
        .collect();

        let urls: Vec<&str> = chain.iter().map(|u| u.url.as_str()).collect();
        assert_eq!(
            urls,
            ["https://lsa.example.com:4450", "https://lsb.example.com:4450"]
        );
    }

    #[test]
    fn test_clear_nulls_head() {
        let mut chain = Chain::new();
        chain.push_front(sig("a"));
        chain.push_front(sig("b"));

        chain.clear();
        assert!(chain.is_empty());
        assert_eq!(chain.len(), 0);

        // Reusable after teardown.
        chain.push_front(sig("c"));
        assert_eq!(chain.len(), 1);
    }

    #[test]
    fn test_long_chain_drop_is_iterative() {
        // Long enough to overflow the stack if teardown recursed.
        let mut chain = Chain::new();
        for i in 0..200_000 {
            chain.push_front(ServerUrl {
                url: format!("https://ls{}.example.com", i),
            });
        }
        drop(chain);
    }

    #[test]
    fn test_json_roundtrip_preserves_order() {
        let chain: TcbSigList = [sig("kernel"), sig("runtime"), sig("model")]
            .into_iter()
            .collect();

        let json = chain.to_json().unwrap();
        let parsed = TcbSigList::from_json(&json).unwrap();

        let names: Vec<&str> = parsed.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["kernel", "runtime", "model"]);
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        let result = TcbSigList::from_json("{not json");
        assert!(result.is_err());
    }
}
