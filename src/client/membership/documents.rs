use std::fmt;

use crate::{
    client::util::upload::{FileUpload, UploadKind},
    model::membership::{DocumentUrls, MembershipType},
};

/// Supporting documents an applicant can attach
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    Photo,
    Nid,
    TaxReceipt,
    LeaseAgreement,
    TradeLicense,
    TinBinCertificate,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 6] = [
        DocumentKind::Photo,
        DocumentKind::Nid,
        DocumentKind::TaxReceipt,
        DocumentKind::LeaseAgreement,
        DocumentKind::TradeLicense,
        DocumentKind::TinBinCertificate,
    ];

    /// Photo, NID and tax receipt are always required. Associate and Corporate members
    /// also need a lease agreement, and only Corporate members need the trade license
    /// and TIN/BIN certificate.
    ///
    /// Re-evaluated whenever the membership type changes, so switching from Corporate to
    /// Life drops the corporate documents again.
    pub fn is_required_for(&self, membership_type: Option<MembershipType>) -> bool {
        use MembershipType::*;

        match self {
            Self::Photo | Self::Nid | Self::TaxReceipt => true,
            Self::LeaseAgreement => matches!(membership_type, Some(Associate | Corporate)),
            Self::TradeLicense | Self::TinBinCertificate => {
                matches!(membership_type, Some(Corporate))
            }
        }
    }

    /// Every kind required for `membership_type`
    pub fn required_for(membership_type: Option<MembershipType>) -> Vec<DocumentKind> {
        Self::ALL
            .into_iter()
            .filter(|kind| kind.is_required_for(membership_type))
            .collect()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Photo => "Photo",
            Self::Nid => "NID",
            Self::TaxReceipt => "Tax receipt",
            Self::LeaseAgreement => "Lease agreement",
            Self::TradeLicense => "Trade license",
            Self::TinBinCertificate => "TIN/BIN certificate",
        }
    }

    /// Multipart field name used by the public submission
    pub fn field_name(&self) -> &'static str {
        match self {
            Self::Photo => "photo",
            Self::Nid => "nid",
            Self::TaxReceipt => "tax_receipt",
            Self::LeaseAgreement => "lease_agreement",
            Self::TradeLicense => "trade_license",
            Self::TinBinCertificate => "tin_bin_certificate",
        }
    }

    /// Storage folder passed to the upload route
    pub fn folder(&self) -> &'static str {
        match self {
            Self::Photo => "membership/photos",
            Self::Nid => "membership/nid",
            Self::TaxReceipt => "membership/tax-receipts",
            Self::LeaseAgreement => "membership/lease-agreements",
            Self::TradeLicense => "membership/trade-licenses",
            Self::TinBinCertificate => "membership/tin-bin-certificates",
        }
    }

    pub fn upload_kind(&self) -> UploadKind {
        match self {
            Self::Photo => UploadKind::Photo,
            _ => UploadKind::Document,
        }
    }

    pub fn url<'a>(&self, urls: &'a DocumentUrls) -> Option<&'a str> {
        let url = match self {
            Self::Photo => &urls.photo_url,
            Self::Nid => &urls.nid_url,
            Self::TaxReceipt => &urls.tax_receipt_url,
            Self::LeaseAgreement => &urls.lease_agreement_url,
            Self::TradeLicense => &urls.trade_license_url,
            Self::TinBinCertificate => &urls.tin_bin_certificate_url,
        };

        url.as_deref().filter(|url| !url.trim().is_empty())
    }

    pub fn set_url(&self, urls: &mut DocumentUrls, url: String) {
        let slot = match self {
            Self::Photo => &mut urls.photo_url,
            Self::Nid => &mut urls.nid_url,
            Self::TaxReceipt => &mut urls.tax_receipt_url,
            Self::LeaseAgreement => &mut urls.lease_agreement_url,
            Self::TradeLicense => &mut urls.trade_license_url,
            Self::TinBinCertificate => &mut urls.tin_bin_certificate_url,
        };

        *slot = Some(url);
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One document input: the URL already on file and/or a newly picked file
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DocumentSlot {
    pub existing_url: Option<String>,
    pub staged: Option<FileUpload>,
}

impl DocumentSlot {
    pub fn is_filled(&self) -> bool {
        self.staged.is_some() || self.existing_url.is_some()
    }
}
