// The frame we render into: a flat byte buffer, 4 bytes per pixel.
// Bytes 0..2 are the color channels (always equal, the field is monochrome); byte 3 is left alone.

pub const BYTES_PER_PIXEL: usize = 4;

pub struct PixelBuffer {
    width: usize,
    height: usize,
    bytes: Vec<u8>,
}

impl PixelBuffer {
    /// A black frame of `width * height` pixels.
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, bytes: vec![0; width * height * BYTES_PER_PIXEL] }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[cfg(test)]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Visual: the whole frame goes black.
    pub fn clear(&mut self) {
        self.bytes.fill(0);
    }

    /// Write `value` into the three color channels of pixel (x,y).
    ///
    /// The write happens only when the byte offset `(y*width + x) * 4` lies in
    /// `(0, len - 4)`, both ends exclusive. That drops the very first pixel and
    /// the very last pixel of the frame along with anything truly out of range.
    /// An `x` past the row end is not rejected on its own: it lands on the next row.
    /// Coordinates whose offset doesn't fit in an `i64` are dropped too.
    #[inline]
    pub fn set_pixel(&mut self, x: i64, y: i64, value: u8) {
        let Some(offset) = y
            .checked_mul(self.width as i64)
            .and_then(|row| row.checked_add(x))
            .and_then(|px| px.checked_mul(BYTES_PER_PIXEL as i64))
        else {
            return;
        };
        let limit = self.bytes.len() as i64 - BYTES_PER_PIXEL as i64;
        if offset > 0 && offset < limit {
            let i = offset as usize;
            self.bytes[i] = value;     // R
            self.bytes[i + 1] = value; // G
            self.bytes[i + 2] = value; // B
        }
    }

    /// Repack into `out` as 0x00RRGGBB words for minifb.
    /// Byte 0 becomes R, 1 becomes G, 2 becomes B; byte 3 is ignored.
    pub fn pack_rgb32(&self, out: &mut Vec<u32>) {
        out.clear();
        out.extend(self.bytes.chunks_exact(BYTES_PER_PIXEL).map(|px| {
            ((px[0] as u32) << 16) | ((px[1] as u32) << 8) | px[2] as u32
        }));
    }
}
