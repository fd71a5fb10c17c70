//! Active locale
//!
//! Every thread has its own active catalog, English until `activate` is
//! called. Loaded catalogs are shared process-wide, so activating the same
//! locale on another thread does not read the file again.
//!
//! ```
//! use speakhuman_i18n::{activate, deactivate, decimal_separator};
//!
//! activate("de_DE", None).unwrap();
//! assert_eq!(decimal_separator(), ',');
//!
//! deactivate();
//! assert_eq!(decimal_separator(), '.');
//! ```

use crate::config::config;
use crate::{Catalog, I18nError, Locale, Result};
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use speakhuman_log::{debug, trace};
use std::cell::RefCell;
use std::collections::HashMap;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::sync::Arc;

type CacheKey = (String, Option<PathBuf>);

static CACHE: Lazy<RwLock<HashMap<CacheKey, Arc<Catalog>>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

thread_local! {
    static ACTIVE: RefCell<Arc<Catalog>> = RefCell::new(Catalog::english());
}

/// Activate a locale for the current thread.
///
/// `path` is searched first for `<tag>.json`; built-in catalogs and
/// `SPEAKHUMAN_LOCALE_PATH` follow. English tags, `"C"` and `"POSIX"`
/// activate the default catalog.
pub fn activate(tag: &str, path: Option<&Path>) -> Result<()> {
    let catalog = resolve(tag, path)?;
    debug!("Activated locale {} ({})", tag, catalog.name());
    install(catalog);
    Ok(())
}

/// Restore the default English catalog for the current thread.
pub fn deactivate() {
    trace!("Deactivated locale");
    install(Catalog::english());
}

/// Catalog active on the current thread.
pub fn active() -> Arc<Catalog> {
    ACTIVE.with(|active| Arc::clone(&active.borrow()))
}

/// Tag of the active catalog, or `None` while the default is active.
pub fn active_locale() -> Option<String> {
    let catalog = active();
    if Arc::ptr_eq(&catalog, &Catalog::english()) {
        None
    } else {
        Some(catalog.name().to_string())
    }
}

/// Decimal separator of the active locale.
pub fn decimal_separator() -> char {
    ACTIVE.with(|active| active.borrow().decimal_separator())
}

/// Thousands separator of the active locale.
pub fn thousands_separator() -> char {
    ACTIVE.with(|active| active.borrow().thousands_separator())
}

fn install(catalog: Arc<Catalog>) -> Arc<Catalog> {
    ACTIVE.with(|active| std::mem::replace(&mut *active.borrow_mut(), catalog))
}

/// Find the catalog for a tag without activating it.
pub fn resolve(tag: &str, path: Option<&Path>) -> Result<Arc<Catalog>> {
    if matches!(tag.trim(), "C" | "POSIX") {
        return Ok(Catalog::english());
    }

    let locale = Locale::parse(tag)?;
    if locale.is_english() {
        return Ok(Catalog::english());
    }

    let key = (locale.posix(), path.map(Path::to_path_buf));
    if let Some(catalog) = CACHE.read().get(&key) {
        trace!("Catalog cache hit for {}", key.0);
        return Ok(Arc::clone(catalog));
    }

    let catalog = Arc::new(load(&locale, path)?);
    let mut cache = CACHE.write();
    Ok(Arc::clone(cache.entry(key).or_insert(catalog)))
}

fn load(locale: &Locale, path: Option<&Path>) -> Result<Catalog> {
    let mut searched = Vec::new();

    if let Some(dir) = path {
        if let Some(catalog) = load_from_dir(dir, locale, &mut searched)? {
            return Ok(catalog);
        }
    }

    if let Some(catalog) = Catalog::builtin(locale)? {
        return Ok(catalog);
    }

    if let Some(dir) = config().locale_path.as_deref() {
        if let Some(catalog) = load_from_dir(dir, locale, &mut searched)? {
            return Ok(catalog);
        }
    }

    Err(I18nError::LocaleNotFound {
        tag: locale.posix(),
        searched,
    })
}

fn load_from_dir(
    dir: &Path,
    locale: &Locale,
    searched: &mut Vec<PathBuf>,
) -> Result<Option<Catalog>> {
    let mut names = vec![locale.posix()];
    let language = locale.language_only().posix();
    if names[0] != language {
        names.push(language);
    }

    for name in names {
        let file = dir.join(format!("{}.json", name));
        if file.is_file() {
            return Catalog::load(&file, locale).map(Some);
        }
        searched.push(file);
    }
    Ok(None)
}

/// Restores the previously active catalog when dropped.
///
/// Created by [`scoped`]. Tied to the thread that created it.
#[must_use = "the locale is restored as soon as the guard is dropped"]
pub struct LocaleGuard {
    previous: Option<Arc<Catalog>>,
    _thread: PhantomData<*const ()>,
}

impl Drop for LocaleGuard {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            trace!("Restoring locale {}", previous.name());
            install(previous);
        }
    }
}

/// Activate a locale until the returned guard is dropped.
///
/// ```
/// use speakhuman_i18n::{scoped, thousands_separator};
///
/// {
///     let _guard = scoped("fr_FR", None).unwrap();
///     assert_eq!(thousands_separator(), '\u{a0}');
/// }
/// assert_eq!(thousands_separator(), ',');
/// ```
pub fn scoped(tag: &str, path: Option<&Path>) -> Result<LocaleGuard> {
    let catalog = resolve(tag, path)?;
    debug!("Activated locale {} for a scope", catalog.name());
    Ok(LocaleGuard {
        previous: Some(install(catalog)),
        _thread: PhantomData,
    })
}

/// Run `f` with a locale active, restoring the previous one afterwards.
pub fn with_locale<T>(tag: &str, path: Option<&Path>, f: impl FnOnce() -> T) -> Result<T> {
    let _guard = scoped(tag, path)?;
    Ok(f())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_catalog(dir: &TempDir, name: &str, json: &str) {
        fs::write(dir.path().join(format!("{}.json", name)), json).unwrap();
    }

    #[test]
    fn test_default_is_english() {
        assert_eq!(decimal_separator(), '.');
        assert_eq!(thousands_separator(), ',');
        assert!(active_locale().is_none());
    }

    #[test]
    fn test_activate_builtin() {
        activate("ru_RU", None).unwrap();
        assert_eq!(decimal_separator(), ',');
        assert_eq!(thousands_separator(), '\u{a0}');
        assert_eq!(active_locale().as_deref(), Some("ru_RU"));
        deactivate();
        assert!(active_locale().is_none());
    }

    #[test]
    fn test_activate_english_variants() {
        for tag in ["en", "en_US", "en-GB", "C", "POSIX"] {
            activate(tag, None).unwrap();
            assert!(active_locale().is_none(), "{} should use the default", tag);
        }
    }

    #[test]
    fn test_activate_unknown_locale() {
        let err = activate("xx_XX", None).unwrap_err();
        assert!(matches!(err, I18nError::LocaleNotFound { .. }));
        assert!(active_locale().is_none());

        assert!(matches!(
            activate("not a locale", None).unwrap_err(),
            I18nError::InvalidLocale(_)
        ));
    }

    #[test]
    fn test_activate_from_path() {
        let dir = TempDir::new().unwrap();
        write_catalog(
            &dir,
            "pt",
            r#"{"decimal_separator": ",", "thousands_separator": ".", "messages": {"today": "hoje"}}"#,
        );

        activate("pt_BR", Some(dir.path())).unwrap();
        assert_eq!(active().text("today"), "hoje");
        assert_eq!(active().text("tomorrow"), "tomorrow");
        assert_eq!(thousands_separator(), '.');
        deactivate();
    }

    #[test]
    fn test_path_lists_searched_files() {
        let dir = TempDir::new().unwrap();
        match resolve("es_MX", Some(dir.path())).unwrap_err() {
            I18nError::LocaleNotFound { tag, searched } => {
                assert_eq!(tag, "es_MX");
                assert!(searched.contains(&dir.path().join("es_MX.json")));
                assert!(searched.contains(&dir.path().join("es.json")));
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_resolve_is_cached() {
        let first = resolve("de_DE", None).unwrap();
        let second = resolve("de_DE", None).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_scoped_restores_previous() {
        activate("de_DE", None).unwrap();
        {
            let _guard = scoped("fr_FR", None).unwrap();
            assert_eq!(active_locale().as_deref(), Some("fr_FR"));
        }
        assert_eq!(active_locale().as_deref(), Some("de_DE"));
        deactivate();
    }

    #[test]
    fn test_with_locale() {
        let sep = with_locale("de_DE", None, decimal_separator).unwrap();
        assert_eq!(sep, ',');
        assert_eq!(decimal_separator(), '.');
    }

    #[test]
    fn test_threads_are_isolated() {
        activate("de_DE", None).unwrap();
        let other = std::thread::spawn(decimal_separator).join().unwrap();
        assert_eq!(other, '.');
        assert_eq!(decimal_separator(), ',');
        deactivate();
    }
}
