use gumdrop::Options;

#[derive(Default, Options)]
pub struct CliStart {
    #[options(help_flag, help = "print help message")]
    pub help: bool,
    #[options(help = "show program version number")]
    pub version: bool,
    #[options(help = "write the sysfs attributes directly instead of going through tuxedod")]
    pub direct: bool,
    #[options(
        meta = "",
        help = "with --direct, use this attribute directory instead of looking up the device"
    )]
    pub sysfs_dir: Option<String>,
    #[options(meta = "", help = "write saved module options here instead of modprobe.d")]
    pub conf_path: Option<String>,
}
