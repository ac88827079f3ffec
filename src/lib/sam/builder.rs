//! Fluent builder for constructing SAM/BAM records in tests.
//!
//! Wraps the noodles `RecordBuf` builder with string-friendly setters so test
//! code can state a record in one expression. Panics on malformed inputs;
//! intended for test data construction, not for parsing untrusted input.

use bstr::BString;
use noodles::core::Position;
use noodles::sam::alignment::record::Flags;
use noodles::sam::alignment::record::MappingQuality;
use noodles::sam::alignment::record::cigar::op::{Kind, Op};
use noodles::sam::alignment::record::data::field::Tag;
use noodles::sam::alignment::record_buf::data::field::Value;
use noodles::sam::alignment::record_buf::{Cigar, QualityScores, RecordBuf, Sequence};

/// Fluent builder for [`RecordBuf`].
///
/// # Example
/// ```
/// use bamfilt_lib::sam::RecordBuilder;
///
/// let record = RecordBuilder::new()
///     .name("read1")
///     .sequence("ACGTACGTACGT")
///     .reference_sequence_id(0)
///     .alignment_start(100)
///     .mapping_quality(60)
///     .cigar("12M")
///     .build();
/// ```
#[derive(Default)]
pub struct RecordBuilder {
    name: Option<String>,
    sequence: Option<String>,
    qualities: Option<Vec<u8>>,
    cigar: Option<Vec<Op>>,
    reference_sequence_id: Option<usize>,
    alignment_start: Option<usize>,
    mapping_quality: Option<u8>,
    paired: bool,
    first_segment: bool,
    tags: Vec<(Tag, Value)>,
}

impl RecordBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the read name.
    #[must_use]
    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    /// Sets the read sequence.
    #[must_use]
    pub fn sequence(mut self, sequence: &str) -> Self {
        self.sequence = Some(sequence.to_string());
        self
    }

    /// Sets per-base quality scores.
    #[must_use]
    pub fn qualities(mut self, qualities: &[u8]) -> Self {
        self.qualities = Some(qualities.to_vec());
        self
    }

    /// Sets the CIGAR from a string such as `"100M"` or `"10S90M"`.
    ///
    /// # Panics
    /// Panics if the string is not a valid CIGAR.
    #[must_use]
    pub fn cigar(mut self, cigar: &str) -> Self {
        self.cigar = Some(parse_cigar(cigar));
        self
    }

    /// Sets the 0-based reference sequence index and marks the record mapped.
    #[must_use]
    pub fn reference_sequence_id(mut self, id: usize) -> Self {
        self.reference_sequence_id = Some(id);
        self
    }

    /// Sets the 1-based alignment start position.
    #[must_use]
    pub fn alignment_start(mut self, start: usize) -> Self {
        self.alignment_start = Some(start);
        self
    }

    /// Sets the mapping quality.
    #[must_use]
    pub fn mapping_quality(mut self, mapq: u8) -> Self {
        self.mapping_quality = Some(mapq);
        self
    }

    /// Marks the record as part of a read pair.
    #[must_use]
    pub fn paired(mut self, paired: bool) -> Self {
        self.paired = paired;
        self
    }

    /// Marks the record as R1 (`true`) or R2 (`false`) of its pair.
    #[must_use]
    pub fn first_segment(mut self, first: bool) -> Self {
        self.first_segment = first;
        self
    }

    /// Adds a string-valued auxiliary tag such as `RX`.
    ///
    /// # Panics
    /// Panics if the tag name is not exactly two bytes.
    #[must_use]
    pub fn tag(mut self, tag: &str, value: &str) -> Self {
        let bytes: [u8; 2] =
            tag.as_bytes().try_into().expect("tag name must be exactly two characters");
        self.tags.push((Tag::from(bytes), Value::from(value)));
        self
    }

    /// Builds the record.
    ///
    /// # Panics
    /// Panics if the alignment start or mapping quality is out of range.
    #[must_use]
    pub fn build(self) -> RecordBuf {
        let mut flags = Flags::empty();
        if self.paired {
            flags |= Flags::SEGMENTED;
            flags |=
                if self.first_segment { Flags::FIRST_SEGMENT } else { Flags::LAST_SEGMENT };
        }
        if self.reference_sequence_id.is_none() {
            flags |= Flags::UNMAPPED;
        }

        let mut builder = RecordBuf::builder().set_flags(flags);

        if let Some(name) = self.name {
            builder = builder.set_name(BString::from(name));
        }
        if let Some(sequence) = self.sequence {
            builder = builder.set_sequence(Sequence::from(sequence.into_bytes()));
        }
        if let Some(qualities) = self.qualities {
            builder = builder.set_quality_scores(QualityScores::from(qualities));
        }
        if let Some(ops) = self.cigar {
            builder = builder.set_cigar(Cigar::from(ops));
        }
        if let Some(id) = self.reference_sequence_id {
            builder = builder.set_reference_sequence_id(id);
        }
        if let Some(start) = self.alignment_start {
            let position =
                Position::try_from(start).expect("alignment start must be greater than zero");
            builder = builder.set_alignment_start(position);
        }
        if let Some(mapq) = self.mapping_quality {
            let mapping_quality =
                MappingQuality::new(mapq).expect("mapping quality must be below 255");
            builder = builder.set_mapping_quality(mapping_quality);
        }

        let mut record = builder.build();
        for (tag, value) in self.tags {
            record.data_mut().insert(tag, value);
        }
        record
    }
}

fn parse_cigar(cigar: &str) -> Vec<Op> {
    let mut ops = Vec::new();
    let mut length = 0usize;
    for c in cigar.chars() {
        if let Some(digit) = c.to_digit(10) {
            length = length * 10 + digit as usize;
        } else {
            let kind = match c {
                'M' => Kind::Match,
                'I' => Kind::Insertion,
                'D' => Kind::Deletion,
                'N' => Kind::Skip,
                'S' => Kind::SoftClip,
                'H' => Kind::HardClip,
                'P' => Kind::Pad,
                '=' => Kind::SequenceMatch,
                'X' => Kind::SequenceMismatch,
                _ => panic!("invalid CIGAR operation: {c}"),
            };
            assert!(length > 0, "CIGAR operation '{c}' has no length");
            ops.push(Op::new(kind, length));
            length = 0;
        }
    }
    assert_eq!(length, 0, "trailing CIGAR length without an operation");
    ops
}
