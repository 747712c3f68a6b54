// ============================================================================
// TransHelper - 惰性缓存
// ============================================================================
//
// 文件: src/core/cache.rs
// 职责: 按键惰性加载并缓存计算结果
// 边界:
//   - ✅ 首次访问加载、后续命中缓存
//   - ✅ 强制重新加载
//   - ❌ 不应包含具体加载逻辑
//   - ❌ 不应包含过期淘汰策略
//
// ============================================================================

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::hash::Hash;

/// 惰性缓存：值一旦计算便保持不变，除非强制重新加载
#[derive(Debug, Clone)]
pub struct LazyCache<K, V> {
    entries: HashMap<K, V>,
}

impl<K: Eq + Hash, V> LazyCache<K, V> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// 获取缓存值，不存在或 `force` 为 true 时调用 loader 重新计算
    pub fn get_or_load<F>(&mut self, key: K, loader: F, force: bool) -> &V
    where
        F: FnOnce(&K) -> V,
    {
        match self.entries.entry(key) {
            Entry::Occupied(mut entry) => {
                if force {
                    let value = loader(entry.key());
                    entry.insert(value);
                }
                entry.into_mut()
            }
            Entry::Vacant(entry) => {
                let value = loader(entry.key());
                entry.insert(value)
            }
        }
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<K: Eq + Hash, V> Default for LazyCache<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
