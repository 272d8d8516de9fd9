use super::*;
use pretty_assertions::assert_eq;

fn builder() -> ArgvBuilder {
    ArgvBuilder::new("./storage_cli", "vdisk_disk1.meta")
}

#[test]
fn test_list_files_has_three_args() {
    let inv = builder().build(Verb::ListFiles, "");
    assert_eq!(inv.argv(), ["./storage_cli", "list_files", "vdisk_disk1.meta"]);
    assert_eq!(inv.args(), ["list_files", "vdisk_disk1.meta"]);
    assert_eq!(inv.verb(), Verb::ListFiles);
}

#[test]
fn test_list_files_ignores_filename() {
    let inv = builder().build(Verb::ListFiles, "notes.txt");
    assert_eq!(inv.argv().len(), 3);
}

#[test]
fn test_file_verbs_append_filename() {
    let b = builder();
    for verb in [Verb::ReadFile, Verb::WriteFile, Verb::DeleteFile] {
        let inv = b.build(verb, "notes.txt");
        assert_eq!(
            inv.argv(),
            [
                "./storage_cli".to_string(),
                verb.to_string(),
                "vdisk_disk1.meta".to_string(),
                "notes.txt".to_string(),
            ]
        );
    }
}

#[test]
fn test_empty_filename_is_passed_through() {
    let inv = builder().build(Verb::ReadFile, "");
    assert_eq!(inv.argv().len(), 4);
    assert_eq!(inv.argv()[3], "");
}

#[test]
fn test_meta_file_is_sanitized_once() {
    let b = ArgvBuilder::new("/opt/cli", " vdisk_disk 2 . meta ");
    assert_eq!(b.meta_file(), "vdisk_disk2.meta");
    assert_eq!(b.binary_path(), Path::new("/opt/cli"));
    assert_eq!(b.build(Verb::ListFiles, "").argv()[2], "vdisk_disk2.meta");
}

#[test]
fn test_filename_is_not_resanitized() {
    let inv = builder().build(Verb::WriteFile, "a b.txt");
    assert_eq!(inv.argv()[3], "a b.txt");
}
