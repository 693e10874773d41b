//! Field flags for interactive PDF form fields.
//!
//! Implements field flags per ISO 32000-1:2008 Section 12.7.3 (Field Flags)
//! for text fields, plus the pending-edit bookkeeping the field model uses:
//! flag edits are not written straight into the persisted `/Ff` mask but
//! accumulated as set/clear bits and merged at read time, then reconciled
//! into the persisted mask on the save path.

use bitflags::bitflags;

bitflags! {
    /// Text field flags (field type Tx).
    ///
    /// Per PDF spec Table 228 (Field flags specific to text fields).
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct TextFieldFlags: u32 {
        // --- Common flags (bits 1-3) ---
        /// Bit 1: Field is read-only
        const READ_ONLY = 1 << 0;
        /// Bit 2: Field is required
        const REQUIRED = 1 << 1;
        /// Bit 3: Field should not be exported
        const NO_EXPORT = 1 << 2;

        // --- Text-specific flags ---
        /// Bit 13: Text may include multiple lines
        const MULTILINE = 1 << 12;

        /// Bit 14: Text should be displayed as asterisks (password)
        const PASSWORD = 1 << 13;

        /// Bit 21: File path should be submitted as field value
        const FILE_SELECT = 1 << 20;

        /// Bit 23: Text should not be spell-checked
        const DO_NOT_SPELL_CHECK = 1 << 22;

        /// Bit 24: Text should not scroll beyond visible area
        const DO_NOT_SCROLL = 1 << 23;

        /// Bit 25: Field is divided into equally spaced positions (comb)
        /// MaxLen must be set when using this flag
        const COMB = 1 << 24;

        /// Bit 26: Field contains rich text
        const RICH_TEXT = 1 << 25;
    }
}

impl Default for TextFieldFlags {
    fn default() -> Self {
        Self::empty()
    }
}

/// Persisted flag mask plus in-flight edits.
///
/// The effective value is `(persisted | set) & !clear`. Editing a flag
/// touches only that flag's bit in the pending masks; `reconcile` folds the
/// pending masks into the persisted mask and must run no later than the
/// save path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PendingFlags {
    /// Flag mask as last persisted (the `/Ff` value).
    pub persisted: TextFieldFlags,
    /// Bits set since the last reconciliation.
    pub set: TextFieldFlags,
    /// Bits cleared since the last reconciliation.
    pub clear: TextFieldFlags,
}

impl PendingFlags {
    /// Create flag state from a persisted mask with no pending edits.
    pub fn from_persisted(persisted: TextFieldFlags) -> Self {
        Self {
            persisted,
            set: TextFieldFlags::empty(),
            clear: TextFieldFlags::empty(),
        }
    }

    /// The effective flag mask: persisted, overlaid with pending edits.
    pub fn effective(&self) -> TextFieldFlags {
        (self.persisted | self.set) & !self.clear
    }

    /// Check a single flag against the effective mask.
    pub fn contains(&self, flag: TextFieldFlags) -> bool {
        self.effective().contains(flag)
    }

    /// Record a pending edit for one flag, leaving all other bits untouched.
    pub fn edit(&mut self, flag: TextFieldFlags, value: bool) {
        if value {
            self.set |= flag;
            self.clear &= !flag;
        } else {
            self.clear |= flag;
            self.set &= !flag;
        }
    }

    /// Whether any edits are pending.
    pub fn is_dirty(&self) -> bool {
        !self.set.is_empty() || !self.clear.is_empty()
    }

    /// Merge pending edits into the persisted mask and return it.
    pub fn reconcile(&mut self) -> TextFieldFlags {
        self.persisted = self.effective();
        self.set = TextFieldFlags::empty();
        self.clear = TextFieldFlags::empty();
        self.persisted
    }
}
