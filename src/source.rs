use crate::{precedence::Precedence, version::Version};
use core::cmp::Ordering;
use std::{rc::Rc, sync::Arc};

/// Anything that has a [`Version`], such as a plugin or a package.
///
/// Implementing it lets unrelated types be compared and sorted by their versions with
/// [`compare_sources`], [`sort_by_version`], and [`latest`].
///
/// ```
/// use semantic_versions::prelude::*;
///
/// struct Plugin {
///     name: &'static str,
///     version: Version,
/// }
///
/// impl VersionSource for Plugin {
///     fn version(&self) -> &Version {
///         &self.version
///     }
/// }
///
/// let mut plugins = vec![
///     Plugin { name: "b", version: "2.0.0".parse().unwrap() },
///     Plugin { name: "a", version: "2.0.0-rc.1".parse().unwrap() },
///     Plugin { name: "c", version: "1.9.9".parse().unwrap() },
/// ];
/// sort_by_version(&mut plugins);
/// assert_eq!(vec!["c", "a", "b"], plugins.iter().map(|p| p.name).collect::<Vec<_>>());
/// ```
pub trait VersionSource {
    /// The version of this source.
    fn version(&self) -> &Version;
}

impl VersionSource for Version {
    fn version(&self) -> &Version {
        self
    }
}

impl<T: VersionSource + ?Sized> VersionSource for &T {
    fn version(&self) -> &Version {
        (**self).version()
    }
}

impl<T: VersionSource + ?Sized> VersionSource for Box<T> {
    fn version(&self) -> &Version {
        (**self).version()
    }
}

impl<T: VersionSource + ?Sized> VersionSource for Rc<T> {
    fn version(&self) -> &Version {
        (**self).version()
    }
}

impl<T: VersionSource + ?Sized> VersionSource for Arc<T> {
    fn version(&self) -> &Version {
        (**self).version()
    }
}

/// Compares two sources, possibly of different types, by the precedence of their versions.
pub fn compare_sources<A, B>(a: &A, b: &B) -> Ordering
where
    A: VersionSource + ?Sized,
    B: VersionSource + ?Sized,
{
    a.version().precedence(b.version())
}

/// Sorts sources by the precedence of their versions, lowest first. The sort is stable, so sources
/// with equivalent versions keep their relative order.
pub fn sort_by_version<T: VersionSource>(sources: &mut [T]) {
    sources.sort_by(compare_sources);
}

/// Returns the source with the highest version precedence. Of several equivalent ones, the last
/// is returned.
pub fn latest<I>(sources: I) -> Option<I::Item>
where
    I: IntoIterator,
    I::Item: VersionSource,
{
    sources.into_iter().max_by(compare_sources)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version_core::VersionCore;

    #[derive(Debug, PartialEq)]
    struct Plugin {
        name: &'static str,
        version: Version,
    }

    impl VersionSource for Plugin {
        fn version(&self) -> &Version {
            &self.version
        }
    }

    fn plugin(name: &'static str, version: &str) -> Plugin {
        Plugin {
            name,
            version: version.parse().unwrap(),
        }
    }

    #[test]
    fn test_version_is_its_own_source() {
        let version = Version::of(1, 0, 0).unwrap();
        assert!(std::ptr::eq(&version, version.version()));
        assert_eq!(
            Ordering::Greater,
            compare_sources(&version, &Version::zero())
        );
    }

    #[test]
    fn test_compare_heterogeneous() {
        let core_only = Version::from(VersionCore::new(2, 0, 0));
        let plugin = plugin("p", "2.0.0+build");
        assert_eq!(Ordering::Equal, compare_sources(&plugin, &core_only));
        assert_eq!(
            Ordering::Less,
            compare_sources(&plugin, &Box::new(Version::of(3, 0, 0).unwrap()))
        );
    }

    #[test]
    fn test_sort_is_stable() {
        let mut plugins = vec![
            plugin("x", "1.0.0+b"),
            plugin("y", "1.0.0-alpha"),
            plugin("z", "1.0.0+a"),
            plugin("w", "0.9.0"),
        ];
        sort_by_version(&mut plugins);
        let names: Vec<_> = plugins.iter().map(|p| p.name).collect();
        assert_eq!(vec!["w", "y", "x", "z"], names);
    }

    #[test]
    fn test_latest() {
        let plugins = [
            plugin("a", "1.2.0"),
            plugin("b", "1.10.0"),
            plugin("c", "1.10.0-rc.1"),
        ];
        assert_eq!(Some(&plugins[1]), latest(&plugins));
        assert_eq!(None, latest(Vec::<Version>::new()));
    }

    #[test]
    fn test_smart_pointers() {
        let shared: Vec<Arc<dyn VersionSource>> = vec![
            Arc::new(plugin("a", "3.0.0")),
            Arc::new(Version::of(1, 0, 0).unwrap()),
        ];
        let newest = latest(shared.iter()).unwrap();
        assert_eq!("3.0.0", newest.version().to_string());

        let rc = Rc::new(Version::of(2, 0, 0).unwrap());
        assert_eq!(Ordering::Less, compare_sources(&rc, &shared[0]));
    }
}
