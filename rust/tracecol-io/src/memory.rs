use crate::{SealingWrite, StorageProfile};

impl SealingWrite for Vec<u8> {
    fn write_all(&mut self, buf: &[u8]) -> std::io::Result<()> {
        self.extend_from_slice(buf);
        Ok(())
    }

    fn seal(&mut self) -> std::io::Result<()> {
        Ok(())
    }

    fn storage_profile(&self) -> StorageProfile {
        StorageProfile {
            min_io_size: 1,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::SealingWrite;

    #[test]
    fn test_mem_writer() {
        let mut buffer = Vec::<u8>::new();
        buffer.write_all(b"abcd").unwrap();
        buffer.write_all(b"123").unwrap();
        buffer.seal().unwrap();
        assert_eq!(buffer, b"abcd123");
    }

    #[test]
    fn test_boxed_mem_writer() {
        let mut writer: Box<dyn SealingWrite> = Box::new(Vec::<u8>::new());
        writer.write_all(b"xyz").unwrap();
        writer.seal().unwrap();
        assert_eq!(writer.storage_profile().min_io_size, 1);
    }
}
