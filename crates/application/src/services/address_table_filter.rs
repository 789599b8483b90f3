use hostlist_domain::{AddressTableEntry, EntryClass, LearnedVia};
use tracing::debug;

/// Keeps only dynamically learned end hosts seen on local ports, preserving
/// input order.
pub struct AddressTableFilter;

impl AddressTableFilter {
    pub fn end_hosts(entries: Vec<AddressTableEntry>) -> Vec<AddressTableEntry> {
        let total = entries.len();
        let (mut overlay, mut fixed, mut router) = (0usize, 0usize, 0usize);

        let kept: Vec<AddressTableEntry> = entries
            .into_iter()
            .filter(|entry| {
                if entry.learned_via() == LearnedVia::Overlay {
                    overlay += 1;
                    return false;
                }
                match entry.class() {
                    EntryClass::EndHost => true,
                    EntryClass::Static => {
                        fixed += 1;
                        false
                    }
                    EntryClass::RouterVirtual => {
                        router += 1;
                        false
                    }
                    EntryClass::Overlay => false,
                }
            })
            .collect();

        debug!(
            total,
            kept = kept.len(),
            overlay,
            static_entries = fixed,
            router,
            "MAC table filtered"
        );
        kept
    }
}
