//! Static dictionary of well-known DICOM tags
//!
//! The table covers the command group, the file meta header, and the common
//! identification, patient, study, and image-pixel attributes a dataset
//! parser meets on every stream. It is built once on first access and never
//! mutated afterwards.

use crate::error::{DicomError, DicomResult};
use crate::tag::Tag;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Dictionary entry describing a standard DICOM tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagInfo {
    pub tag: Tag,
    /// Data encoding, e.g. "UL" or "CS"
    pub vr: &'static str,
    /// Human-readable name of the tag, e.g. "TransferSyntaxUID"
    pub name: &'static str,
    /// Cardinality (number of values expected in the element)
    pub vm: &'static str,
}

/// (group, element, VR, name, VM) rows of the built-in table
const ENTRIES: &[(u16, u16, &str, &str, &str)] = &[
    // Command group
    (0x0000, 0x0000, "UL", "CommandGroupLength", "1"),
    (0x0000, 0x0002, "UI", "AffectedSOPClassUID", "1"),
    (0x0000, 0x0003, "UI", "RequestedSOPClassUID", "1"),
    (0x0000, 0x0100, "US", "CommandField", "1"),
    (0x0000, 0x0110, "US", "MessageID", "1"),
    (0x0000, 0x0120, "US", "MessageIDBeingRespondedTo", "1"),
    (0x0000, 0x0600, "AE", "MoveDestination", "1"),
    (0x0000, 0x0700, "US", "Priority", "1"),
    (0x0000, 0x0800, "US", "CommandDataSetType", "1"),
    (0x0000, 0x0900, "US", "Status", "1"),
    (0x0000, 0x0901, "AT", "OffendingElement", "1-n"),
    (0x0000, 0x0902, "LO", "ErrorComment", "1"),
    (0x0000, 0x1000, "UI", "AffectedSOPInstanceUID", "1"),
    (0x0000, 0x1001, "UI", "RequestedSOPInstanceUID", "1"),
    (0x0000, 0x1020, "US", "NumberOfRemainingSuboperations", "1"),
    (0x0000, 0x1021, "US", "NumberOfCompletedSuboperations", "1"),
    (0x0000, 0x1022, "US", "NumberOfFailedSuboperations", "1"),
    (0x0000, 0x1023, "US", "NumberOfWarningSuboperations", "1"),
    (0x0000, 0x1030, "AE", "MoveOriginatorApplicationEntityTitle", "1"),
    (0x0000, 0x1031, "US", "MoveOriginatorMessageID", "1"),
    // File meta information
    (0x0002, 0x0000, "UL", "FileMetaInformationGroupLength", "1"),
    (0x0002, 0x0001, "OB", "FileMetaInformationVersion", "1"),
    (0x0002, 0x0002, "UI", "MediaStorageSOPClassUID", "1"),
    (0x0002, 0x0003, "UI", "MediaStorageSOPInstanceUID", "1"),
    (0x0002, 0x0010, "UI", "TransferSyntaxUID", "1"),
    (0x0002, 0x0012, "UI", "ImplementationClassUID", "1"),
    (0x0002, 0x0013, "SH", "ImplementationVersionName", "1"),
    (0x0002, 0x0016, "AE", "SourceApplicationEntityTitle", "1"),
    // Identification
    (0x0008, 0x0005, "CS", "SpecificCharacterSet", "1-n"),
    (0x0008, 0x0008, "CS", "ImageType", "2-n"),
    (0x0008, 0x0016, "UI", "SOPClassUID", "1"),
    (0x0008, 0x0018, "UI", "SOPInstanceUID", "1"),
    (0x0008, 0x0020, "DA", "StudyDate", "1"),
    (0x0008, 0x0021, "DA", "SeriesDate", "1"),
    (0x0008, 0x0030, "TM", "StudyTime", "1"),
    (0x0008, 0x0031, "TM", "SeriesTime", "1"),
    (0x0008, 0x0050, "SH", "AccessionNumber", "1"),
    (0x0008, 0x0052, "CS", "QueryRetrieveLevel", "1"),
    (0x0008, 0x0060, "CS", "Modality", "1"),
    (0x0008, 0x0070, "LO", "Manufacturer", "1"),
    (0x0008, 0x0080, "LO", "InstitutionName", "1"),
    (0x0008, 0x0090, "PN", "ReferringPhysicianName", "1"),
    (0x0008, 0x1030, "LO", "StudyDescription", "1"),
    (0x0008, 0x103E, "LO", "SeriesDescription", "1"),
    // Patient
    (0x0010, 0x0010, "PN", "PatientName", "1"),
    (0x0010, 0x0020, "LO", "PatientID", "1"),
    (0x0010, 0x0030, "DA", "PatientBirthDate", "1"),
    (0x0010, 0x0040, "CS", "PatientSex", "1"),
    // Study / series / frame of reference
    (0x0020, 0x000D, "UI", "StudyInstanceUID", "1"),
    (0x0020, 0x000E, "UI", "SeriesInstanceUID", "1"),
    (0x0020, 0x0010, "SH", "StudyID", "1"),
    (0x0020, 0x0011, "IS", "SeriesNumber", "1"),
    (0x0020, 0x0013, "IS", "InstanceNumber", "1"),
    (0x0020, 0x0032, "DS", "ImagePositionPatient", "3"),
    (0x0020, 0x0037, "DS", "ImageOrientationPatient", "6"),
    (0x0020, 0x0052, "UI", "FrameOfReferenceUID", "1"),
    // Image pixel description
    (0x0028, 0x0002, "US", "SamplesPerPixel", "1"),
    (0x0028, 0x0004, "CS", "PhotometricInterpretation", "1"),
    (0x0028, 0x0008, "IS", "NumberOfFrames", "1"),
    (0x0028, 0x0010, "US", "Rows", "1"),
    (0x0028, 0x0011, "US", "Columns", "1"),
    (0x0028, 0x0030, "DS", "PixelSpacing", "2"),
    (0x0028, 0x0100, "US", "BitsAllocated", "1"),
    (0x0028, 0x0101, "US", "BitsStored", "1"),
    (0x0028, 0x0102, "US", "HighBit", "1"),
    (0x0028, 0x0103, "US", "PixelRepresentation", "1"),
    (0x0028, 0x1050, "DS", "WindowCenter", "1-n"),
    (0x0028, 0x1051, "DS", "WindowWidth", "1-n"),
    (0x0028, 0x1052, "DS", "RescaleIntercept", "1"),
    (0x0028, 0x1053, "DS", "RescaleSlope", "1"),
    // Pixel data and sequence framing
    (0x7FE0, 0x0010, "OW", "PixelData", "1"),
    (0xFFFE, 0xE000, "NA", "Item", "1"),
    (0xFFFE, 0xE00D, "NA", "ItemDelimitationItem", "1"),
    (0xFFFE, 0xE0DD, "NA", "SequenceDelimitationItem", "1"),
];

static TAG_DICT: Lazy<HashMap<Tag, TagInfo>> = Lazy::new(|| {
    let mut dict = HashMap::with_capacity(ENTRIES.len());
    for &(group, element, vr, name, vm) in ENTRIES {
        let tag = Tag::new(group, element);
        dict.insert(tag, TagInfo { tag, vr, name, vm });
    }
    dict
});

/// Find information about the given tag.
///
/// Group-length elements (even group, element 0x0000) that are not in the
/// table get a synthesized generic entry; any other unknown tag is a
/// `TagNotFound` error.
pub fn lookup_tag(tag: Tag) -> DicomResult<TagInfo> {
    match TAG_DICT.get(&tag) {
        Some(info) => Ok(*info),
        None if tag.group % 2 == 0 && tag.element == 0x0000 => Ok(TagInfo {
            tag,
            vr: "UL",
            name: "GenericGroupLength",
            vm: "1",
        }),
        None => Err(DicomError::TagNotFound(tag)),
    }
}

/// Like [`lookup_tag`], but panics when the tag is unknown.
///
/// Only for call sites that have already established the tag is well-known;
/// a miss here is a programming error, not an input condition.
pub fn must_lookup_tag(tag: Tag) -> TagInfo {
    match lookup_tag(tag) {
        Ok(info) => info,
        Err(err) => {
            log::error!("tag {} not found: {}", tag, err);
            panic!("tag {} not found: {}", tag, err);
        }
    }
}

/// Find information about the tag with the given name.
///
/// Linear scan over the table; meant for diagnostics and tooling, not the
/// parse hot path.
///
/// Example: `lookup_tag_by_name("TransferSyntaxUID")`
pub fn lookup_tag_by_name(name: &str) -> DicomResult<TagInfo> {
    TAG_DICT
        .values()
        .find(|entry| entry.name == name)
        .copied()
        .ok_or_else(|| DicomError::TagNameNotFound(name.to_string()))
}

/// Human-readable diagnostic string for a tag, e.g. `"(0002,0010)[TransferSyntaxUID]"`
pub fn tag_string(tag: Tag) -> String {
    match lookup_tag(tag) {
        Ok(info) => format!("{}[{}]", tag, info.name),
        Err(_) => format!("{}[??]", tag),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::METADATA_GROUP;

    #[test]
    fn test_lookup_known_tag() {
        let info = lookup_tag(Tag::new(METADATA_GROUP, 0x0010)).unwrap();
        assert_eq!(info.name, "TransferSyntaxUID");
        assert_eq!(info.vr, "UI");
        assert_eq!(info.vm, "1");
    }

    #[test]
    fn test_lookup_synthesizes_group_length() {
        // (0012,0000) is not in the table but matches the group-length shape
        let info = lookup_tag(Tag::new(0x0012, 0x0000)).unwrap();
        assert_eq!(info.name, "GenericGroupLength");
        assert_eq!(info.vr, "UL");
        assert_eq!(info.tag, Tag::new(0x0012, 0x0000));
    }

    #[test]
    fn test_lookup_unknown_tag_fails() {
        // Odd group, so not a group length
        let err = lookup_tag(Tag::new(0x0013, 0x0000)).unwrap_err();
        assert!(matches!(err, DicomError::TagNotFound(_)));

        let err = lookup_tag(Tag::new(0x0012, 0x0099)).unwrap_err();
        assert!(matches!(err, DicomError::TagNotFound(_)));
    }

    #[test]
    fn test_explicit_group_length_entries_win() {
        let info = lookup_tag(Tag::new(0x0002, 0x0000)).unwrap();
        assert_eq!(info.name, "FileMetaInformationGroupLength");
    }

    #[test]
    fn test_must_lookup_tag() {
        let info = must_lookup_tag(Tag::PIXEL_DATA);
        assert_eq!(info.name, "PixelData");
    }

    #[test]
    #[should_panic]
    fn test_must_lookup_unknown_tag_panics() {
        must_lookup_tag(Tag::new(0x0013, 0x0001));
    }

    #[test]
    fn test_lookup_by_name() {
        let info = lookup_tag_by_name("PatientName").unwrap();
        assert_eq!(info.tag, Tag::new(0x0010, 0x0010));
        assert_eq!(info.vr, "PN");

        let err = lookup_tag_by_name("NoSuchAttribute").unwrap_err();
        assert!(matches!(err, DicomError::TagNameNotFound(_)));
    }

    #[test]
    fn test_tag_string() {
        assert_eq!(
            tag_string(Tag::new(0x0010, 0x0010)),
            "(0010,0010)[PatientName]"
        );
        assert_eq!(tag_string(Tag::new(0x0013, 0x0001)), "(0013,0001)[??]");
    }
}
