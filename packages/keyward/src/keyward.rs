//! The [`Keyward`] entry point

use crate::error::Result;
use keyward_accountkit::{AccountKitParser, AccountSetupDataModel, SignatureVerifier, Unarmor};
use keyward_common::{Error, ErrorKind, KeywardConfig};
use keyward_passgen::{
    all_alphabets, estimate_secret_entropy, estimate_secret_entropy_with_word_list,
    string_to_codepoints, GeneratedSecret, PassgenError, PassphraseGeneratorSettings, PasswordGeneratorSettings,
    SecretGenerator, WordList,
};
use keyward_sessionkeys::{
    marshal_for_push, to_push_bundle, unmarshal_fetched, DecryptedSessionKeysBundleModel,
    MergedSessionKeys, OriginBundle, SessionKeyIdentifier, SessionKeysBundle,
    SessionKeysBundleMerger, SessionKeysMemoryCache,
};
use log::{debug, info};
use std::path::Path;
use std::sync::Arc;

/// Caller interface of the secret and session key subsystem
///
/// The session key cache is injected so several components can share it.
#[derive(Debug)]
pub struct Keyward<U, V> {
    config: KeywardConfig,
    secrets: SecretGenerator,
    account_kits: AccountKitParser<U, V>,
    merger: SessionKeysBundleMerger,
    cache: Arc<SessionKeysMemoryCache>,
}

impl<U: Unarmor, V: SignatureVerifier> Keyward<U, V> {
    /// Assemble from already loaded parts
    pub fn new(
        config: KeywardConfig,
        word_list: Option<WordList>,
        account_kits: AccountKitParser<U, V>,
        cache: Arc<SessionKeysMemoryCache>,
    ) -> Self {
        let secrets = word_list.map_or_else(SecretGenerator::new, SecretGenerator::with_word_list);
        Self {
            config,
            secrets,
            account_kits,
            merger: SessionKeysBundleMerger::new(),
            cache,
        }
    }

    /// Assemble from configuration, loading the configured word list
    ///
    /// # Errors
    ///
    /// Returns a [`keyward_common::Error`] if the word list cannot be loaded.
    pub async fn from_config(
        config: KeywardConfig,
        account_kits: AccountKitParser<U, V>,
        cache: Arc<SessionKeysMemoryCache>,
    ) -> Result<Self> {
        let word_list = match &config.word_list_path {
            Some(path) => Some(load_word_list(path).await?),
            None => None,
        };
        info!(
            "Keyward initialized (passphrases {})",
            if word_list.is_some() { "enabled" } else { "disabled" }
        );
        Ok(Self::new(config, word_list, account_kits, cache))
    }

    /// Active configuration
    #[must_use]
    pub fn config(&self) -> &KeywardConfig {
        &self.config
    }

    /// Shared session key cache
    #[must_use]
    pub fn cache(&self) -> &Arc<SessionKeysMemoryCache> {
        &self.cache
    }

    /// Generate a password
    ///
    /// # Errors
    ///
    /// Fails when `settings` selects no alphabet.
    pub fn generate_password(&self, settings: &PasswordGeneratorSettings) -> Result<GeneratedSecret> {
        Ok(self.secrets.generate_password(settings)?)
    }

    /// Generate a password with the configured defaults
    ///
    /// # Errors
    ///
    /// Fails when the defaults select no alphabet.
    pub fn generate_default_password(&self) -> Result<GeneratedSecret> {
        self.generate_password(&PasswordGeneratorSettings::from(&self.config.password_defaults))
    }

    /// Generate a passphrase
    ///
    /// # Errors
    ///
    /// Fails when no word list is configured.
    pub fn generate_passphrase(
        &self,
        settings: &PassphraseGeneratorSettings,
    ) -> Result<GeneratedSecret> {
        Ok(self.secrets.generate_passphrase(settings)?)
    }

    /// Generate a passphrase with the configured defaults
    ///
    /// # Errors
    ///
    /// Fails when no word list is configured.
    pub fn generate_default_passphrase(&self) -> Result<GeneratedSecret> {
        self.generate_passphrase(&PassphraseGeneratorSettings::from(
            &self.config.passphrase_defaults,
        ))
    }

    /// Estimate the strength of a secret supplied by the user
    ///
    /// With a word list configured, secrets made of list words joined by one
    /// repeated separator are scored as passphrases. Returns `None` when no
    /// symbol belongs to a known alphabet.
    #[must_use]
    pub fn estimate_secret_entropy(&self, secret: &str) -> Option<f64> {
        match self.secrets.word_list() {
            Some(words) => estimate_secret_entropy_with_word_list(secret, words, all_alphabets()),
            None => estimate_secret_entropy(&string_to_codepoints(secret), all_alphabets()),
        }
    }

    /// Parse an account kit file and verify its signature
    ///
    /// # Errors
    ///
    /// Returns the account kit failure, whose message is meant for the user.
    pub async fn parse_and_verify_account_kit(
        &self,
        file_content: &str,
    ) -> Result<AccountSetupDataModel> {
        Ok(self.account_kits.parse_and_verify(file_content).await?)
    }

    /// Merge freshly fetched bundles and cache the result
    ///
    /// Invalid bundles are skipped. The cache is only replaced once the merge
    /// has completed.
    pub fn merge_session_key_bundles(
        &self,
        bundles: &[DecryptedSessionKeysBundleModel],
    ) -> Arc<MergedSessionKeys> {
        let merged = Arc::new(self.merger.merge_valid(bundles));
        self.cache.set(Arc::clone(&merged));
        merged
    }

    /// Re-merge fetched bundles with the locally cached keys and cache the result
    pub fn merge_with_cached_keys(
        &self,
        bundles: &[DecryptedSessionKeysBundleModel],
    ) -> Arc<MergedSessionKeys> {
        let local = self.cache.get().unwrap_or_default();
        let merged = Arc::new(self.merger.merge_with_local(bundles, &local));
        self.cache.set(Arc::clone(&merged));
        merged
    }

    /// Replace the cached keys
    pub fn cache_merged_keys(&self, merged: MergedSessionKeys) {
        self.cache.set(merged);
    }

    /// Currently cached keys
    #[must_use]
    pub fn cached_merged_keys(&self) -> Option<Arc<MergedSessionKeys>> {
        self.cache.get()
    }

    /// Bundle to update when pushing the cache upstream
    #[must_use]
    pub fn latest_modified_origin_bundle(&self) -> Option<OriginBundle> {
        self.cache.find_latest_modified_origin_bundle()
    }

    /// Cached key for an item, without version prefix
    #[must_use]
    pub fn session_key(&self, identifier: &SessionKeyIdentifier) -> Option<String> {
        self.cache.session_key(identifier)
    }

    /// Record a key obtained locally
    pub fn put_session_key(&self, identifier: SessionKeyIdentifier, session_key: impl Into<String>) {
        self.cache.put(identifier, session_key);
    }

    /// The cached keys as a bundle ready to be encrypted and pushed
    #[must_use]
    pub fn push_bundle(&self) -> Option<SessionKeysBundle> {
        self.cache.get().map(|merged| to_push_bundle(&merged))
    }

    /// Forget every cached key
    pub fn clear_session_keys(&self) {
        debug!("Clearing session keys cache");
        self.cache.clear();
    }

    /// Normalize a fetched key to its bare form
    #[must_use]
    pub fn unmarshal_fetched_key(&self, raw: &str) -> String {
        unmarshal_fetched(raw).to_string()
    }

    /// Normalize a key to its push form
    #[must_use]
    pub fn marshal_key_for_push(&self, raw: &str) -> String {
        marshal_for_push(raw)
    }
}

async fn load_word_list(path: &Path) -> Result<WordList> {
    WordList::load(path).await.map_err(|err| {
        let context = format!("loading word list {}", path.display());
        let error = match err {
            PassgenError::Io(io) => Error::from(io),
            other => Error::with_source(ErrorKind::WordList, other),
        };
        error.context(context).into()
    })
}
