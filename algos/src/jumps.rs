//! Binary lifting: `2^k`-th ancestors of every vertex of a rooted tree.

use crate::JumpsError;

/// Ancestor tables of a tree on vertices `1..=n`.
///
/// `up[k][v]` is the `2^k`-th ancestor of `v`, or `0` once that walks past
/// the root. Vertex `0` is the sentinel and is its own ancestor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BinaryJumps {
    up: Vec<Vec<usize>>,
    depth: Vec<usize>,
    root: usize,
}

impl BinaryJumps {
    /// Builds the tables for the tree on `1..=n` given by `edges`, rooted at `root`.
    ///
    /// The tree is walked with an explicit stack, so deep trees (paths with
    /// millions of vertices) do not overflow the call stack.
    ///
    /// # Errors
    ///
    /// - [`JumpsError::VertexOutOfRange`] if `root` or an endpoint is outside `1..=n`.
    /// - [`JumpsError::NotATree`] if the edges do not connect all vertices
    ///   without a cycle.
    pub fn build(n: usize, edges: &[(usize, usize)], root: usize) -> Result<Self, JumpsError> {
        let check = |vertex: usize| {
            if (1..=n).contains(&vertex) {
                Ok(vertex)
            } else {
                Err(JumpsError::VertexOutOfRange { vertex, count: n })
            }
        };

        check(root)?;
        let not_a_tree = JumpsError::NotATree {
            edges: edges.len(),
            count: n,
        };
        if edges.len() + 1 != n {
            return Err(not_a_tree);
        }

        let mut adj = vec![Vec::new(); n + 1];
        for &(u, v) in edges {
            adj[check(u)?].push(v);
            adj[check(v)?].push(u);
        }

        let levels = (usize::BITS - n.leading_zeros()).max(1) as usize;
        let mut up = vec![vec![0; n + 1]; levels];
        let mut depth = vec![0; n + 1];
        let mut visited = vec![false; n + 1];

        let mut reached = 0;
        let mut stack = vec![root];
        visited[root] = true;
        while let Some(u) = stack.pop() {
            reached += 1;
            for &v in &adj[u] {
                if !visited[v] {
                    visited[v] = true;
                    up[0][v] = u;
                    depth[v] = depth[u] + 1;
                    stack.push(v);
                }
            }
        }
        if reached != n {
            return Err(not_a_tree);
        }

        for k in 1..levels {
            for v in 1..=n {
                up[k][v] = up[k - 1][up[k - 1][v]];
            }
        }

        Ok(Self { up, depth, root })
    }

    /// Number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.depth.len() - 1
    }

    /// Whether the tree is empty, which a built tree never is.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The root.
    #[inline]
    pub fn root(&self) -> usize {
        self.root
    }

    /// Distance from `u` to the root.
    ///
    /// # Panics
    ///
    /// Panics if `u` is outside `1..=n`.
    #[inline]
    pub fn depth(&self, u: usize) -> usize {
        self.depth[self.vertex(u)]
    }

    /// The ancestor `delta` levels above `u`, `None` past the root.
    ///
    /// # Panics
    ///
    /// Panics if `u` is outside `1..=n`.
    pub fn jump(&self, u: usize, delta: usize) -> Option<usize> {
        if delta > self.depth(u) {
            return None;
        }
        let mut u = u;
        for (k, up) in self.up.iter().enumerate() {
            if delta >> k & 1 == 1 {
                u = up[u];
            }
        }
        Some(u)
    }

    /// Whether `ancestor` lies on the path from `u` to the root, `u` included.
    ///
    /// # Panics
    ///
    /// Panics if either vertex is outside `1..=n`.
    pub fn is_ancestor(&self, ancestor: usize, u: usize) -> bool {
        let (da, du) = (self.depth(ancestor), self.depth(u));
        du >= da && self.jump(u, du - da) == Some(ancestor)
    }

    /// The child of `ancestor` on the path down to `u`.
    ///
    /// `None` unless `ancestor` is a proper ancestor of `u`.
    ///
    /// # Panics
    ///
    /// Panics if either vertex is outside `1..=n`.
    pub fn direct_child(&self, u: usize, ancestor: usize) -> Option<usize> {
        if u == ancestor || !self.is_ancestor(ancestor, u) {
            return None;
        }
        self.jump(u, self.depth(u) - self.depth(ancestor) - 1)
    }

    /// Lowest common ancestor of `u` and `v`.
    ///
    /// # Panics
    ///
    /// Panics if either vertex is outside `1..=n`.
    pub fn lca(&self, u: usize, v: usize) -> usize {
        let (mut u, mut v) = if self.depth(u) >= self.depth(v) {
            (u, v)
        } else {
            (v, u)
        };
        let delta = self.depth(u) - self.depth(v);
        u = self.jump(u, delta).unwrap_or(self.root);
        if u == v {
            return u;
        }
        for up in self.up.iter().rev() {
            if up[u] != up[v] {
                u = up[u];
                v = up[v];
            }
        }
        self.up[0][u]
    }

    #[inline]
    fn vertex(&self, u: usize) -> usize {
        assert!(
            (1..=self.len()).contains(&u),
            "vertex {u} is outside 1..={}",
            self.len()
        );
        u
    }
}
