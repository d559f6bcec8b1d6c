use std::{fmt::Debug, fs, path::Path};

use log::warn;

use crate::{
    constants::DESCRIPTOR_WIDTH,
    error::{MintError, Result},
};

/// One value of a feature descriptor, serialized as its little-endian bytes
pub trait FeatureElement: Copy + Debug {
    const WIDTH: usize;

    fn write_le(&self, out: &mut Vec<u8>);
}

impl FeatureElement for u8 {
    const WIDTH: usize = 1;

    fn write_le(&self, out: &mut Vec<u8>) {
        out.push(*self);
    }
}

// Raw SIFT descriptors come out of the extractor as float32
impl FeatureElement for f32 {
    const WIDTH: usize = 4;

    fn write_le(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.to_le_bytes());
    }
}

/// Flattened descriptors of one image, in extractor order. Never mutated once built;
/// the hasher only ever reads rotated copies.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector<T: FeatureElement = u8> {
    elements: Vec<T>,
}

impl<T: FeatureElement> FeatureVector<T> {
    pub fn new(elements: Vec<T>) -> Self {
        if elements.len() % DESCRIPTOR_WIDTH != 0 {
            warn!(
                "[FeatureVector::new] length {} is not a multiple of the descriptor width {}",
                elements.len(),
                DESCRIPTOR_WIDTH
            );
        }
        FeatureVector { elements }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Number of complete descriptors in the vector
    pub fn descriptor_count(&self) -> usize {
        self.elements.len() / DESCRIPTOR_WIDTH
    }

    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Serialize a copy of the vector rotated right by `shift` positions,
    /// so element `i` of the copy is element `(i - shift) mod len` of the original.
    pub fn rotated_bytes(&self, shift: u64) -> Vec<u8> {
        let n = self.elements.len();
        let mut out = Vec::with_capacity(n * T::WIDTH);
        if n == 0 {
            return out;
        }

        let split = n - (shift % n as u64) as usize;
        for el in self.elements[split..].iter().chain(&self.elements[..split]) {
            el.write_le(&mut out);
        }
        out
    }
}

impl FeatureVector<u8> {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        FeatureVector::new(bytes.to_vec())
    }

    /// Load a vector stored as one byte per element
    pub fn read_from(path: impl AsRef<Path>) -> Result<Self> {
        let bytes = fs::read(path)?;
        Ok(FeatureVector::from_bytes(&bytes))
    }
}

impl FeatureVector<f32> {
    /// Build a vector from packed little-endian float32 values
    pub fn from_le_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() % 4 != 0 {
            return Err(MintError::InvalidFeatureData(format!(
                "{} bytes is not a whole number of float32 values",
                bytes.len()
            )));
        }

        let elements = bytes
            .chunks_exact(4)
            .map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]))
            .collect();
        Ok(FeatureVector::new(elements))
    }

    pub fn read_from(path: impl AsRef<Path>) -> Result<Self> {
        let bytes = fs::read(path)?;
        FeatureVector::from_le_bytes(&bytes)
    }
}

impl From<Vec<u8>> for FeatureVector<u8> {
    fn from(elements: Vec<u8>) -> Self {
        FeatureVector::new(elements)
    }
}

impl From<Vec<f32>> for FeatureVector<f32> {
    fn from(elements: Vec<f32>) -> Self {
        FeatureVector::new(elements)
    }
}
