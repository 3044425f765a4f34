// Copyright (c) ChefKiss 2021-2025. Licensed under the Thou Shalt Not Profit License version 1.5. See LICENSE for details.

const FW_GATES: [(&str, fn(u32) -> bool); 4] = [
    ("psp_fw_lt_103", |v| v < 103),
    ("psp_fw_le_151", |v| v <= 151),
    ("psp_fw_ge_200", |v| v >= 200),
    ("psp_fw_ge_300", |v| v >= 300),
];

pub fn main() {
    println!("cargo:rerun-if-env-changed=PSP_FW_VERSION");
    for (name, _) in FW_GATES {
        println!("cargo:rustc-check-cfg=cfg({name})");
    }

    let Ok(raw) = std::env::var("PSP_FW_VERSION") else {
        return;
    };
    let Ok(version) = raw.trim().parse::<u32>() else {
        println!("cargo:warning=PSP_FW_VERSION `{raw}` is not a decimal firmware version, ignoring");
        return;
    };

    for (name, gate) in FW_GATES {
        if gate(version) {
            println!("cargo:rustc-cfg={name}");
        }
    }
}
