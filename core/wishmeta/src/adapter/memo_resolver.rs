//! アイテム ID 解決のラン内メモ化（adapter 層）
//!
//! 同じ表示名は複数のお知らせにまたがって現れるため、ランの間だけ
//! 表示名 → ID を記憶して再解決を省く。キャッシュの有無で結果は変わらない。

use crate::ports::outbound::ItemIdResolver;
use common::error::Error;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// 表示名で 1 ラン分メモ化する ItemIdResolver 実装
pub struct MemoItemResolver {
    inner: Arc<dyn ItemIdResolver>,
    cache: Mutex<HashMap<String, i64>>,
}

impl MemoItemResolver {
    pub fn new(inner: Arc<dyn ItemIdResolver>) -> Self {
        Self {
            inner,
            cache: Mutex::new(HashMap::new()),
        }
    }
}

impl ItemIdResolver for MemoItemResolver {
    fn resolve(&self, name: &str) -> Result<i64, Error> {
        if let Some(id) = self
            .cache
            .lock()
            .map_err(|_| Error::system("memo cache lock poisoned"))?
            .get(name)
        {
            return Ok(*id);
        }
        let id = self.inner.resolve(name)?;
        self.cache
            .lock()
            .map_err(|_| Error::system("memo cache lock poisoned"))?
            .insert(name.to_string(), id);
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CountingResolver {
        calls: Mutex<usize>,
    }

    impl ItemIdResolver for CountingResolver {
        fn resolve(&self, name: &str) -> Result<i64, Error> {
            *self.calls.lock().unwrap() += 1;
            Ok(name.chars().count() as i64)
        }
    }

    #[test]
    fn test_repeated_names_hit_the_cache() {
        let inner = Arc::new(CountingResolver {
            calls: Mutex::new(0),
        });
        let memo = MemoItemResolver::new(inner.clone());
        assert_eq!(memo.resolve("香菱").unwrap(), 2);
        assert_eq!(memo.resolve("香菱").unwrap(), 2);
        assert_eq!(memo.resolve("重云").unwrap(), 2);
        assert_eq!(*inner.calls.lock().unwrap(), 2);
    }

    #[test]
    fn test_results_match_the_inner_resolver() {
        let inner = Arc::new(CountingResolver {
            calls: Mutex::new(0),
        });
        let memo = MemoItemResolver::new(Arc::new(CountingResolver {
            calls: Mutex::new(0),
        }));
        for name in ["茜特菈莉", "香菱", "茜特菈莉", "北斗"] {
            assert_eq!(memo.resolve(name).unwrap(), inner.resolve(name).unwrap());
        }
    }

    #[test]
    fn test_unresolved_zero_is_cached_too() {
        struct ZeroResolver {
            calls: Mutex<usize>,
        }
        impl ItemIdResolver for ZeroResolver {
            fn resolve(&self, _name: &str) -> Result<i64, Error> {
                *self.calls.lock().unwrap() += 1;
                Ok(0)
            }
        }
        let inner = Arc::new(ZeroResolver {
            calls: Mutex::new(0),
        });
        let memo = MemoItemResolver::new(inner.clone());
        assert_eq!(memo.resolve("未知").unwrap(), 0);
        assert_eq!(memo.resolve("未知").unwrap(), 0);
        assert_eq!(*inner.calls.lock().unwrap(), 1);
    }
}
