//! Contact store service
//!
//! Sole owner of the persisted contact collection. Every call is a full
//! round-trip to the backing file: read, parse, optionally mutate and
//! rewrite the whole file. Nothing is cached between calls.
//!
//! There is no locking. Two processes running `add` at the same time can both
//! read the same collection and the later write wins, dropping the other's
//! contact.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt, StoreOp};
use crate::config::{CorruptStorePolicy, Settings};
use crate::domain::{parse_collection, serialize_collection, Contact, EMPTY_COLLECTION};
use crate::infrastructure::traits::FileSystem;

/// Result of reading the backing store before any policy is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreContents {
    /// The store parsed into a collection (possibly empty).
    Valid(Vec<Contact>),
    /// The store exists but does not hold a contact collection.
    Corrupt { reason: String },
}

/// Service for listing, fetching, adding and removing contacts.
pub struct ContactService {
    fs: Arc<dyn FileSystem>,
    settings: Arc<Settings>,
}

impl ContactService {
    /// Create a new contact service.
    pub fn new(fs: Arc<dyn FileSystem>, settings: Arc<Settings>) -> Self {
        Self { fs, settings }
    }

    /// Path of the backing store.
    pub fn store_path(&self) -> &Path {
        &self.settings.store_path
    }

    /// Create the backing store holding `[]` if it does not exist yet.
    ///
    /// Never touches an existing file.
    #[instrument(skip(self), fields(path = %self.store_path().display()))]
    pub fn ensure_exists(&self) -> ApplicationResult<()> {
        let path = self.store_path();
        if self.fs.exists(path) {
            return Ok(());
        }
        debug!("initializing empty contact store");
        self.fs
            .ensure_parent(path)
            .with_store_context(StoreOp::Init, path)?;
        self.fs
            .write(path, EMPTY_COLLECTION)
            .with_store_context(StoreOp::Init, path)
    }

    /// Read and classify the backing store without applying the corrupt-store policy.
    ///
    /// Empty or whitespace-only content is a valid, empty collection.
    pub fn load(&self) -> ApplicationResult<StoreContents> {
        self.ensure_exists()?;
        let path = self.store_path();
        let content = self
            .fs
            .read_to_string(path)
            .with_store_context(StoreOp::Read, path)?;

        Ok(match parse_collection(&content) {
            Ok(contacts) => StoreContents::Valid(contacts),
            Err(e) => StoreContents::Corrupt {
                reason: e.to_string(),
            },
        })
    }

    /// All contacts in insertion order.
    ///
    /// With the `recover` policy, read and parse failures are logged and an
    /// empty list is returned. With `fail` they are returned as errors.
    #[instrument(skip(self))]
    pub fn list(&self) -> ApplicationResult<Vec<Contact>> {
        match self.load() {
            Ok(contents) => self.resolve(contents),
            Err(ApplicationError::StoreRead { path, source })
                if self.settings.corrupt_store == CorruptStorePolicy::Recover =>
            {
                warn!(
                    "cannot read contact store {}: {}; treating as empty",
                    path.display(),
                    source
                );
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }

    /// First contact whose id matches exactly, or `None`.
    #[instrument(skip(self))]
    pub fn get_by_id(&self, id: &str) -> ApplicationResult<Option<Contact>> {
        let contacts = self.list()?;
        Ok(contacts.into_iter().find(|c| c.has_id(id)))
    }

    /// Append a new contact with a generated id and persist the collection.
    ///
    /// The contact is returned only once the write has succeeded.
    #[instrument(skip(self))]
    pub fn add(&self, name: &str, email: &str, phone: &str) -> ApplicationResult<Contact> {
        let mut contacts = self.read_for_update()?;
        let contact = Contact::new(name, email, phone);
        contacts.push(contact.clone());

        self.persist(&contacts)?;
        info!(id = %contact.id, "added contact");
        Ok(contact)
    }

    /// Remove the first contact with a matching id.
    ///
    /// When nothing matches, the store is left untouched and `None` is returned.
    #[instrument(skip(self))]
    pub fn remove(&self, id: &str) -> ApplicationResult<Option<Contact>> {
        let mut contacts = self.read_for_update()?;
        let Some(index) = contacts.iter().position(|c| c.has_id(id)) else {
            debug!("no contact with id {id}, store left unchanged");
            return Ok(None);
        };

        let removed = contacts.remove(index);
        self.persist(&contacts)?;
        info!(id = %removed.id, "removed contact");
        Ok(Some(removed))
    }

    /// Read failures propagate; corruption follows the configured policy.
    fn read_for_update(&self) -> ApplicationResult<Vec<Contact>> {
        let contents = self.load()?;
        self.resolve(contents)
    }

    fn resolve(&self, contents: StoreContents) -> ApplicationResult<Vec<Contact>> {
        match contents {
            StoreContents::Valid(contacts) => {
                debug!("loaded {} contacts", contacts.len());
                Ok(contacts)
            }
            StoreContents::Corrupt { reason } => match self.settings.corrupt_store {
                CorruptStorePolicy::Recover => {
                    warn!(
                        "contact store {} is corrupt ({}); treating as empty",
                        self.store_path().display(),
                        reason
                    );
                    Ok(Vec::new())
                }
                CorruptStorePolicy::Fail => Err(ApplicationError::CorruptStore {
                    path: self.store_path().to_path_buf(),
                    reason,
                }),
            },
        }
    }

    fn persist(&self, contacts: &[Contact]) -> ApplicationResult<()> {
        let path = self.store_path();
        let content = serialize_collection(contacts)?;
        self.fs
            .write(path, &content)
            .with_store_context(StoreOp::Write, path)
    }
}
