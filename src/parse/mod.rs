//! Record grammar parsing.
//!
//! One small parser per record type, each returning structured values so the
//! checks never re-scan raw TXT text:
//! - Tag lists (`name=value;` pairs) shared by DKIM, DMARC, MTA-STS and BIMI
//! - SPF terms and DNS-lookup counting
//! - DMARC policy and alignment
//! - DKIM key records
//! - MTA-STS records and policy location
//! - BIMI logo and authority locations

mod bimi;
mod dkim;
mod dmarc;
mod mta_sts;
mod spf;
mod tags;

// Re-export public API
pub use bimi::BimiRecord;
pub use dkim::DkimKeyRecord;
pub use dmarc::{
    select_dmarc_records, Alignment, AlignmentMode, DmarcPolicy, DmarcRecord, DMARC_VERSION,
};
pub use mta_sts::{policy_url, MtaStsRecord, MTA_STS_VERSION};
pub use spf::{causes_dns_lookup, select_spf_records, SpfRecord, SPF_VERSION};
pub use tags::{has_version_prefix, parse_tag_list, TagList};
