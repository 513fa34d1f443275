fn main() {
    #[cfg(target_os = "windows")]
    {
        // Icon shown for sticker-studio.exe in Explorer and the taskbar.
        let mut res = winres::WindowsResource::new();
        res.set_icon("assets/icon.ico");
        res.compile().expect("failed to compile Windows resources");
    }
}
