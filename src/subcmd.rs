// SPDX-FileCopyrightText: 2025 UnionTech Software Technology Co., Ltd.
//
// SPDX-License-Identifier: MIT

pub mod generate;
pub mod statistics;

pub use generate::subcmd_generate;
pub use statistics::subcmd_statistics;
