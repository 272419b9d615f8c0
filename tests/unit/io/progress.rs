//! Tests for multi-document progress tracking

#[cfg(test)]
mod tests {
    use std::path::Path;
    use std::time::Duration;
    use wavyshapes::io::progress::ProgressManager;

    // Tests layer counts are tracked per document
    // Verified by ignoring layer updates
    #[test]
    fn test_layer_progress() {
        let mut manager = ProgressManager::new();
        manager.initialize(2);
        manager.start_document(0, Path::new("docs/rings.json"), 3);
        assert_eq!(manager.document_progress(0), Some((0, 3)));

        manager.update_layers(0, 2);
        assert_eq!(manager.document_progress(0), Some((2, 3)));

        manager.update_layers(0, 10);
        assert_eq!(manager.document_progress(0), Some((3, 3)));
        manager.finish();
    }

    // Tests completion marks every layer done
    // Verified by leaving the position untouched on completion
    #[test]
    fn test_complete_document() {
        let mut manager = ProgressManager::default();
        manager.initialize(1);
        manager.start_document(0, Path::new("spiral.json"), 4);
        manager.complete_document(0, Duration::from_millis(120));
        assert_eq!(manager.document_progress(0), Some((4, 4)));
        manager.finish();
    }

    // Tests unknown documents report nothing
    // Verified by returning a zeroed entry
    #[test]
    fn test_unknown_document() {
        let mut manager = ProgressManager::new();
        manager.initialize(3);
        manager.start_document(2, Path::new("late.json"), 1);
        assert_eq!(manager.document_progress(0), None);
        assert_eq!(manager.document_progress(5), None);
        assert_eq!(manager.document_progress(2), Some((0, 1)));
    }

    // Tests large batches get a batch bar without panicking
    // Verified by creating one bar per document
    #[test]
    fn test_large_batch() {
        let mut manager = ProgressManager::new();
        manager.initialize(20);
        for index in 0..20 {
            manager.start_document(index, Path::new("doc.json"), 2);
            manager.complete_document(index, Duration::ZERO);
        }
        assert_eq!(manager.document_progress(19), Some((2, 2)));
        manager.finish();
    }
}
