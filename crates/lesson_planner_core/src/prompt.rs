//! crates/lesson_planner_core/src/prompt.rs
//!
//! The fixed instruction text sent with every generation request, and the
//! per-request user prompt built from the lesson parameters. Pure data plus
//! string assembly; the network call lives behind the generation port.

use crate::domain::LessonParams;

/// The system instruction defining the two-stage output contract, the
/// mandated markdown structure, and the literal document separator.
pub const SYSTEM_INSTRUCTION: &str = r#"
KAMU ADALAH AHLI KURIKULUM DEEP LEARNING & CONTENT DEVELOPER PENDIDIKAN.

PERAN & TUGAS:
Bertindaklah sebagai Ahli Kurikulum dan Guru Profesional jenjang SMP. Tugasmu terbagi menjadi dua tahap dalam satu respon lengkap:
1. TAHAP PERENCANAAN: Menyusun Modul Ajar/RPP Deep Learning yang sangat detail.
2. TAHAP PENGEMBANGAN: Membuat Materi Ajar (Outline Slide/Handout) dan LKPD berdasarkan modul tersebut.

LOGIKA PENYUSUNAN (WAJIB IKUTI STRUKTUR INI):

Setiap respon HARUS menggunakan format Markdown yang rapi (Header, Bold, List, Table) dan mengikuti urutan berikut.

PENTING: Pisahkan antara TAHAP 1 dan TAHAP 2 menggunakan separator teks persis: <!-- BATAS_DOKUMEN -->

# MODUL AJAR DEEP LEARNING

## INFORMASI UMUM
- **Nama Penyusun**: [Nama dari Input]
- **Nama Sekolah**: [Sekolah dari Input]
- **Mata Pelajaran**: [Mapel dari Input]
- **Kelas / Fase**: [Kelas dari Input]
- **Topik / Materi**: [Topik dari Input]
- **Alokasi Waktu**: [Durasi dari Input]

---

## TAHAP 1: PERENCANAAN MODUL AJAR

### A. IDENTIFIKASI
1. **Kesiapan Murid**: Analisis prasyarat skill/pengetahuan.
2. **Karakteristik Mata Pelajaran**: Esensi materi.
3. **Dimensi Profil Lulusan**: Pilih yang relevan.

### B. DESAIN PEMBELAJARAN
1. **Tujuan Pembelajaran (ABCD)**.
2. **Praktik Pedagogis**.
3. **Kemitraan Pembelajaran**.
4. **Lingkungan Pembelajaran**.
5. **Pemanfaatan Teknologi Digital**.

### C. PENGALAMAN PEMBELAJARAN
Rancang alur dengan prinsip: **Berkesadaran**, **Bermakna**, dan **Menggembirakan**.
*(Pastikan kata-kata Berkesadaran, Bermakna, Menggembirakan ditulis persis agar sistem bisa mendeteksi)*

#### 1. Kegiatan Awal (10-15%)
   - **Orientasi**
   - **Apersepsi**
   - **Motivasi**

#### 2. Kegiatan Inti (Siklus Deep Learning)
   - **Memahami (To Understand)**: Aktivitas eksplorasi konsep.
   - **Mengaplikasi (To Apply)**: Aktivitas praktik/hands-on.
   - **Merefleksi (To Reflect)**: Aktivitas metakognitif.

#### 3. Kegiatan Penutup
   - Kesimpulan & Refleksi.

### D. ASESMEN
1. **Asesmen Awal** (Non-diagnostik).
2. **Asesmen Proses (Formatif)**.
3. **Asesmen Akhir (Sumatif)**.

### E. LAMPIRAN RUBRIK PENILAIAN
1. **Rubrik Asesmen Akademik** (Tabel).
2. **Rubrik Asesmen Karakter** (Tabel Dimensi Profil Lulusan).

<!-- BATAS_DOKUMEN -->

# BAHAN AJAR & LKPD PENDUKUNG

## TAHAP 2: PENGEMBANGAN MATERI

### 1. OUTLINE MATERI AJAR (Slide)
- **Slide 1**: Judul.
- **Slide 2**: Apersepsi.
- **Slide 3-5**: Materi Inti.
- **Slide 6**: Studi Kasus.
- **Slide 7**: Kesimpulan.

### 2. RANCANGAN LKPD
**Judul Aktivitas:** [Nama Aktivitas]

**Langkah Kerja Siswa:**
1. [Langkah...]

**Pertanyaan Refleksi Siswa:**
1. [Pertanyaan...]

INSTRUKSI TAMBAHAN:
- Gunakan bahasa Indonesia formal.
- Wajib sertakan <!-- BATAS_DOKUMEN --> di antara Tahap 1 dan Tahap 2.
"#;

fn field_or_dash(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => "-",
    }
}

/// Builds the per-request user prompt by substituting the lesson parameters
/// into the fixed narrative template and appending the mandatory formatting
/// directives.
pub fn build_user_prompt(params: &LessonParams) -> String {
    let duration = field_or_dash(params.duration.as_deref());
    let integration_line = match params.integration.as_deref() {
        Some(integration) if !integration.trim().is_empty() => {
            format!("- Integrasi Mapel Lain: {integration}\n")
        }
        _ => String::new(),
    };

    format!(
        r#"Tolong susun Perangkat Pembelajaran Lengkap (Modul Ajar + Materi & LKPD) untuk:

Identitas Modul:
- Nama Penulis: {author}
- Asal Sekolah: {school}
- Alokasi Waktu/Durasi: {duration}

Data Pembelajaran:
- Mata Pelajaran: {subject}
- Materi Topik: {topic}
- Kelas: {grade}
{integration_line}
Instruksi Khusus & Wajib:
1. GANTI TOTAL istilah "Profil Pelajar Pancasila" dengan "Dimensi Profil Lulusan".
2. PENTING: Ikuti struktur PENGALAMAN PEMBELAJARAN di System Instruction.
   - Pastikan Apersepsi dilabeli sebagai (Berkesadaran).
   - Motivasi dilabeli sebagai (Menggembirakan).
   - Kegiatan Inti dilabeli sebagai (Bermakna).
3. Pada bagian "Mengaplikasi (To Apply)", berikan contoh konkret aktivitas siswa yang sesuai dengan durasi {activity_duration}.
4. Buatkan rubrik penilaian dalam format tabel.
"#,
        author = field_or_dash(params.author.as_deref()),
        school = field_or_dash(params.school.as_deref()),
        duration = duration,
        subject = params.subject,
        topic = params.topic,
        grade = params.grade,
        integration_line = integration_line,
        activity_duration = if duration == "-" { "standar" } else { duration },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> LessonParams {
        LessonParams {
            subject: "IPA".into(),
            topic: "Perubahan Iklim".into(),
            grade: "8 SMP".into(),
            integration: Some("Matematika".into()),
            author: Some("Bu Sari".into()),
            school: Some("SMP Negeri 1".into()),
            duration: Some("2 x 40 Menit".into()),
        }
    }

    #[test]
    fn prompt_substitutes_every_field() {
        let prompt = build_user_prompt(&params());
        assert!(prompt.contains("Mata Pelajaran: IPA"));
        assert!(prompt.contains("Materi Topik: Perubahan Iklim"));
        assert!(prompt.contains("Kelas: 8 SMP"));
        assert!(prompt.contains("Integrasi Mapel Lain: Matematika"));
        assert!(prompt.contains("Nama Penulis: Bu Sari"));
        assert!(prompt.contains("sesuai dengan durasi 2 x 40 Menit"));
    }

    #[test]
    fn absent_optional_fields_render_as_dash() {
        let prompt = build_user_prompt(&LessonParams {
            subject: "IPS".into(),
            topic: "Interaksi Sosial".into(),
            grade: "7 SMP".into(),
            ..Default::default()
        });
        assert!(prompt.contains("Nama Penulis: -"));
        assert!(prompt.contains("Asal Sekolah: -"));
        assert!(prompt.contains("Alokasi Waktu/Durasi: -"));
        assert!(!prompt.contains("Integrasi Mapel Lain"));
        assert!(prompt.contains("durasi standar"));
    }

    #[test]
    fn system_instruction_mandates_the_separator_once_per_stage_boundary() {
        assert!(SYSTEM_INSTRUCTION.contains(crate::domain::DOCUMENT_SEPARATOR));
    }
}
