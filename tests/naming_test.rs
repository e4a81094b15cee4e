#[cfg(test)]
mod naming_tests {
    use torg::naming::extract_test_name;

    #[test]
    fn test_fl_files_get_fl_prefix() {
        assert_eq!(extract_test_name("fl/algorithm.cpp"), "fl_algorithm");
        assert_eq!(extract_test_name("fl/allocator.cpp"), "fl_allocator");
        assert_eq!(extract_test_name("fl/codec_jpeg.cpp"), "fl_codec_jpeg");
    }

    #[test]
    fn test_fx_files_get_fx_prefix() {
        assert_eq!(extract_test_name("fx/engine.cpp"), "fx_engine");
        assert_eq!(
            extract_test_name("fx/audio_backbeat_detector.cpp"),
            "fx_audio_backbeat_detector"
        );
    }

    #[test]
    fn test_fx_prefix_on_already_prefixed_name() {
        // the derived name simply stacks the directory prefix
        assert_eq!(extract_test_name("fx/test_fx_engine.cpp"), "fx_test_fx_engine");
    }

    #[test]
    fn test_other_files_use_bare_basename() {
        assert_eq!(extract_test_name("color.cpp"), "color");
        assert_eq!(extract_test_name("noise/test_noise.cpp"), "test_noise");
        assert_eq!(
            extract_test_name("chipsets/clockless_block_generic.cpp"),
            "clockless_block_generic"
        );
    }

    #[test]
    fn test_nested_directories_use_last_segment() {
        assert_eq!(
            extract_test_name("platforms/esp32/riscv_interrupts.cpp"),
            "riscv_interrupts"
        );
    }

    #[test]
    fn test_fl_fx_must_be_top_level_directories() {
        assert_eq!(extract_test_name("flx/misc.cpp"), "misc");
        assert_eq!(extract_test_name("tests/fl/inner.cpp"), "inner");
        assert_eq!(extract_test_name("fxy/misc.cpp"), "misc");
    }

    #[test]
    fn test_trailing_cpp_only() {
        // only a trailing ".cpp" is stripped, interior matches survive
        assert_eq!(extract_test_name("weird.cpp.orig"), "weird.cpp.orig");
        assert_eq!(extract_test_name("double.cpp.cpp"), "double.cpp");
        assert_eq!(extract_test_name("noext"), "noext");
    }

    #[test]
    fn test_path_without_separator() {
        assert_eq!(extract_test_name("standalone.cpp"), "standalone");
    }
}
