//! Sniffer result types

/// Signature at the start of every vendor container.
pub const MAGIC: &[u8; 8] = b".MS-LUT ";

/// How payload samples are stored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadEncoding {
    /// One byte per channel, scaled by 1/255 (default)
    Byte,
    /// Three little-endian f32 per record, clamped to [0, 1]
    Float32,
}

impl PayloadEncoding {
    pub fn bytes_per_channel(self) -> usize {
        match self {
            PayloadEncoding::Byte => 1,
            PayloadEncoding::Float32 => 4,
        }
    }

    /// Channel counts a record may carry, in the order they are tried.
    pub fn candidate_channels(self) -> &'static [usize] {
        match self {
            PayloadEncoding::Byte => &[3, 4],
            PayloadEncoding::Float32 => &[3],
        }
    }
}

/// Channel order of the stored samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    Rgb,
    Bgr,
}

impl ByteOrder {
    /// Reorders a stored `[c0, c1, c2]` record into RGB order.
    pub fn to_rgb<T: Copy>(self, record: [T; 3]) -> [T; 3] {
        match self {
            ByteOrder::Rgb => record,
            ByteOrder::Bgr => [record[2], record[1], record[0]],
        }
    }

    /// Inverse of [`ByteOrder::to_rgb`].
    pub fn from_rgb<T: Copy>(self, rgb: [T; 3]) -> [T; 3] {
        // A three-element swap is its own inverse.
        self.to_rgb(rgb)
    }
}

/// Grid geometry proposed by one sniffing strategy, before channel order is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub grid_size: usize,
    pub channel_count: usize,
    pub data_offset: usize,
}

/// Everything the decoder needs to walk a binary payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatGuess {
    /// Points per axis of the 3D grid
    pub grid_size: usize,
    /// Bytes per stored record, 3 or 4
    pub channel_count: usize,
    /// Byte offset of the first record
    pub data_offset: usize,
    /// Order of the first three bytes of each record
    pub byte_order: ByteOrder,
}

impl FormatGuess {
    pub fn from_geometry(geometry: Geometry, byte_order: ByteOrder) -> Self {
        Self {
            grid_size: geometry.grid_size,
            channel_count: geometry.channel_count,
            data_offset: geometry.data_offset,
            byte_order,
        }
    }

    /// Number of entries a complete table of this grid holds.
    pub fn entry_count(&self) -> usize {
        self.grid_size.pow(3)
    }
}

/// Informational fields of a `.MS-LUT` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerHeader {
    pub version: u32,
    /// First plausible payload offset stored at 0x20 or 0x28, if any.
    pub offset_hint: Option<usize>,
}

/// Outcome of a successful sniff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sniffed {
    /// Input is already a textual table and should be copied verbatim
    AlreadyText,
    /// Input is binary with the inferred layout
    Binary(FormatGuess),
}
