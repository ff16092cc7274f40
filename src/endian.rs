/// Byte order used for the fixed-width numeric values of a reader or writer.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default, Hash)]
pub enum Endian {
    /// Most significant byte first.
    Big,
    /// Least significant byte first.
    Little,
    /// Whatever order the target platform uses in memory.
    #[default]
    Native,
}

impl Endian {
    /// Returns `true` if values in this byte order can be copied to and from memory without
    /// reversing their bytes.
    #[inline(always)]
    pub fn is_native(self) -> bool {
        match self {
            Self::Native => true,
            Self::Little => cfg!(target_endian = "little"),
            Self::Big => cfg!(target_endian = "big"),
        }
    }
}
